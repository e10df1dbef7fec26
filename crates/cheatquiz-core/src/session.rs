//! The quiz runner.
//!
//! A [`QuizRunner`] owns one [`Session`]: it shuffles the records once, asks
//! them one by one over any `BufRead`/`Write` pair, and keeps the score. The
//! session moves from running to done exactly once, either when the user
//! types the sentinel, when the records run out, or when input ends.

use std::io::{BufRead, Write};
use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex};

use crate::error::QuizError;
use crate::model::{GameMode, Record};
use crate::style::{AnsiStyler, StyleRole, Styler};

/// Typing this as an answer ends the session.
pub const DEFAULT_SENTINEL: &str = "---";

/// Not a computed value.
const SCORE_JOKE: &str = "Over 9000!!!!11!!";

static INLINE_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.*?)`").expect("valid inline span regex"));

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The user typed the sentinel.
    Sentinel,
    /// Every selected record was asked.
    Exhausted,
    /// Input closed before the records ran out.
    EndOfInput,
}

/// Lifecycle of a session. There is no way back from `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Done(StopReason),
}

/// Per-run quiz state.
#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<Record>,
    score: u32,
    asked: u32,
    state: SessionState,
    /// Indices into `records` of wrongly answered questions.
    missed: Vec<usize>,
}

impl Session {
    fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            score: 0,
            asked: 0,
            state: SessionState::Running,
            missed: Vec::new(),
        }
    }

    /// Records in presentation order (shuffled once the run has started).
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn asked(&self) -> u32 {
        self.asked
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Wrongly answered records, in the order they were asked.
    pub fn missed(&self) -> impl Iterator<Item = &Record> {
        self.missed.iter().map(|&i| &self.records[i])
    }
}

/// Drives a quiz session over a pair of text streams.
pub struct QuizRunner<G> {
    session: Session,
    rng: G,
    styler: Box<dyn Styler>,
    sentinel: String,
    mode: GameMode,
}

impl<G: Rng> QuizRunner<G> {
    /// Create a runner over `records`, shuffling with `rng`.
    pub fn new(records: Vec<Record>, rng: G) -> Self {
        Self {
            session: Session::new(records),
            rng,
            styler: Box::new(AnsiStyler),
            sentinel: DEFAULT_SENTINEL.to_string(),
            mode: GameMode::default(),
        }
    }

    pub fn with_styler(mut self, styler: Box<dyn Styler>) -> Self {
        self.styler = styler;
        self
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Play the session to completion.
    ///
    /// End of input counts as the sentinel. Calling `run` on a finished
    /// session returns its stop reason without asking anything.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        mut input: I,
        mut out: O,
    ) -> Result<StopReason, QuizError> {
        if let SessionState::Done(reason) = self.session.state {
            return Ok(reason);
        }

        self.print_banner(&mut out)?;
        self.session.records.shuffle(&mut self.rng);

        let total = self.session.records.len();
        let limit = self.mode.question_limit().map_or(total, |n| n.min(total));

        let mut reason = StopReason::Exhausted;
        let mut buf = Vec::new();

        for idx in 0..limit {
            let record = &self.session.records[idx];

            writeln!(out)?;
            writeln!(
                out,
                "{}",
                self.styler
                    .paint(StyleRole::Cyan, &format!("## {}", record.category))
            )?;
            writeln!(
                out,
                "{}:",
                highlight_spans(&*self.styler, &record.question)
            )?;
            out.flush()?;

            // Bytes, not `read_line`: a line that is not UTF-8 is a wrong
            // answer, not an I/O error.
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                reason = StopReason::EndOfInput;
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let guess = strip_line_ending(&line);
            if guess == self.sentinel {
                reason = StopReason::Sentinel;
                break;
            }

            self.session.asked += 1;
            let correct = record.accepts(guess);
            let tally_role = if correct {
                self.session.score += 1;
                StyleRole::Green
            } else {
                self.session.missed.push(idx);
                StyleRole::Red
            };

            writeln!(
                out,
                "({}/{}). Answer: {}",
                self.styler
                    .paint(tally_role, &self.session.score.to_string()),
                self.session.asked,
                self.styler.paint(StyleRole::Yellow, &record.answer_list()),
            )?;
        }

        self.session.state = SessionState::Done(reason);
        tracing::info!(
            asked = self.session.asked,
            score = self.session.score,
            ?reason,
            "session finished"
        );
        Ok(reason)
    }

    fn print_banner<O: Write>(&self, out: &mut O) -> Result<(), QuizError> {
        let total = self.session.records.len();
        writeln!(out, "Currently you have {total} tips to practice.")?;
        if let Some(limit) = self.mode.question_limit().filter(|&n| n < total) {
            writeln!(out, "This {} round asks {limit} of them.", self.mode)?;
        }
        writeln!(
            out,
            "If there are some {}, those should be included in the answer.",
            self.styler.paint(StyleRole::Green, "color coded texts")
        )?;
        writeln!(
            out,
            "The game lasts until you answer '{}'. Happy practicing!",
            self.styler.paint(StyleRole::Red, &self.sentinel)
        )?;
        Ok(())
    }

    /// Print the final score, then any missed questions.
    pub fn report<O: Write>(&self, mut out: O) -> Result<(), QuizError> {
        writeln!(
            out,
            "Your score is {} jklol, it's {}. Good job!",
            self.styler.paint(StyleRole::Yellow, SCORE_JOKE),
            self.styler
                .paint(StyleRole::Green, &self.session.score.to_string()),
        )?;

        let mut missed = self.session.missed().peekable();
        if missed.peek().is_some() {
            writeln!(out)?;
            writeln!(out, "Missed:")?;
            for r in missed {
                writeln!(
                    out,
                    "  {} {}",
                    self.styler.paint(StyleRole::Cyan, &format!("[{}]", r.category)),
                    highlight_spans(&*self.styler, &r.question)
                )?;
                writeln!(
                    out,
                    "    {}",
                    self.styler.paint(StyleRole::Yellow, &r.answer_list())
                )?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Replace each backtick span in `text` with its contents painted green.
pub fn highlight_spans(styler: &dyn Styler, text: &str) -> String {
    INLINE_SPAN_RE
        .replace_all(text, |caps: &Captures| {
            styler.paint(StyleRole::Green, &caps[1])
        })
        .into_owned()
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
