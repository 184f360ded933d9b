use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use logx::log::{JsonFormatter, LogFormatter, LogLevel, LogRecord, TextFormatter};

const TS: &str = "2025-01-26T12:34:56.789Z";

fn benchmark_formatter(c: &mut Criterion) {
    let text_plain = TextFormatter::plain();
    let text_colored = TextFormatter::colored();
    let json = JsonFormatter::default();

    let long_message = "A".repeat(1000);
    let escaped_message = "quote \" newline \n tab \t backslash \\".repeat(20);

    let cases: [(&str, LogRecord); 3] = [
        (
            "basic",
            LogRecord::new("This is a test message", LogLevel::Info, "UserService", TS),
        ),
        (
            "long_message",
            LogRecord::new(&long_message, LogLevel::Warn, "UserService", TS),
        ),
        (
            "escaped_message",
            LogRecord::new(&escaped_message, LogLevel::Error, "UserService", TS),
        ),
    ];

    let formatters: [(&str, &dyn LogFormatter); 3] = [
        ("text_plain", &text_plain),
        ("text_colored", &text_colored),
        ("json", &json),
    ];

    let mut group = c.benchmark_group("formatter");

    // Baseline: 什么都不做的基准测试
    group.bench_function("baseline", |b| {
        b.iter(|| {
            black_box(());
        })
    });

    for (case, record) in &cases {
        for (name, formatter) in formatters {
            group.bench_with_input(BenchmarkId::new(name, case), record, |b, record| {
                b.iter(|| black_box(formatter.format(black_box(record)).unwrap()))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_formatter);
criterion_main!(benches);
