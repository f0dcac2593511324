// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gotest_report::{classify, parse, parse_str};

/// Build a synthetic `go test` stream with `packages` packages of `tests` tests
fn synthetic_output(packages: usize, tests: usize) -> String {
    let mut out = String::new();
    for p in 0..packages {
        let suite = format!("example.com/bench/pkg{p}");
        for t in 0..tests {
            let name = format!("TestCase{t}");
            for line in ["=== RUN", "working", "done"] {
                out.push_str(
                    &serde_json::json!({"Suite": suite, "Test": name, "Msg": line}).to_string(),
                );
                out.push('\n');
            }
            if t % 10 == 0 {
                out.push_str(&format!("--- FAIL: {name} (0.01s)\n"));
                out.push_str("    case_test.go:12: unexpected value\n");
            } else {
                out.push_str(&format!("--- PASS: {name} (0.01s)\n"));
            }
        }
        out.push_str(&format!("BenchmarkPkg{p}-8\t1000000\t1234 ns/op\t48 B/op\t2 allocs/op\n"));
        out.push_str(&format!("ok  \t{suite}\t0.250s\n"));
    }
    out
}

fn parser_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (packages, tests) in [(1, 50), (10, 100)] {
        let output = synthetic_output(packages, tests);
        group.throughput(Throughput::Bytes(output.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse_str", format!("{packages}x{tests}")),
            &output,
            |b, output| b.iter(|| parse_str(std::hint::black_box(output), "")),
        );
        group.bench_with_input(
            BenchmarkId::new("parse_reader", format!("{packages}x{tests}")),
            &output,
            |b, output| b.iter(|| parse(std::hint::black_box(output.as_bytes()), "")),
        );
    }
    group.finish();
}

fn classify_benchmarks(c: &mut Criterion) {
    let lines = [
        r#"{"Suite":"pkgA","Test":"TestFoo","Msg":"hello\n"}"#,
        "--- FAIL: TestFoo/sub (0.02s)",
        "ok  \tgithub.com/acme/widgets\t0.050s\tcoverage: 91.2% of statements",
        "BenchmarkSum256-8  \t 1000000\t      1024 ns/op\t     256 B/op\t       1 allocs/op",
        "    encode_test.go:41: expected \"a\", got \"b\"",
    ];
    c.bench_function("classify_mixed_lines", |b| {
        b.iter(|| {
            for line in lines {
                std::hint::black_box(classify(line));
            }
        })
    });
}

criterion_group!(benches, parser_benchmarks, classify_benchmarks);
criterion_main!(benches);
