use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cheatquiz_core::parser::{classify_line, parse_str, split_answers};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let small = r#"# Vim

## Movement
* `h` - Move left
* `j`, `gj` - Move down
* `w`, `W` - Jump to the start of the next word

## Editing
* `dd` - Delete the current line
* `:wq`, `:x`, `ZZ` - Save and quit
"#;

    let large = {
        let mut s = String::new();
        for section in 0..20 {
            s.push_str(&format!("\n## Section {section}\n\nSome prose about it.\n\n"));
            for i in 0..50 {
                s.push_str(&format!(
                    "* `cmd{i}`, ```alt{i}``` - Do thing {i} with `motion`\n"
                ));
            }
        }
        s
    };

    group.bench_function("small", |b| b.iter(|| parse_str(black_box(small))));

    group.bench_function("large", |b| b.iter(|| parse_str(black_box(&large))));

    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    group.bench_function("classify_question", |b| {
        b.iter(|| classify_line(black_box("  * `ci(`, `ci)` - Change inside `parens`")))
    });

    group.bench_function("classify_ignored", |b| {
        b.iter(|| classify_line(black_box("Plain prose that matches nothing at all.")))
    });

    group.bench_function("split_answers", |b| {
        b.iter(|| split_answers(black_box("`:wq`, ```:x```, `` `ZZ` ``")))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_lines);
criterion_main!(benches);
