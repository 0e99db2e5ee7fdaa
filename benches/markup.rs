//! Benchmarks for markdown to Jira markup conversion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gh2jira::utils::markup::markdown_to_jira;

const BODY: &str = r#"## Steps to reproduce

1. Run `cargo build --release`
2. Start the **server** with *debug* logging
   - check [the docs](https://example.com/docs)

```sh
RUST_LOG=debug ./server
```

| Platform | Result |
|----------|--------|
| Linux    | ~~ok~~ crash |

> Happens on every start
"#;

fn bench_markdown_to_jira(c: &mut Criterion) {
    c.bench_function("markdown_to_jira_issue_body", |b| {
        b.iter(|| markdown_to_jira(black_box(BODY)))
    });
}

fn bench_plain_text(c: &mut Criterion) {
    let text = "Plain comment without any markup at all. ".repeat(20);
    c.bench_function("markdown_to_jira_plain_text", |b| {
        b.iter(|| markdown_to_jira(black_box(&text)))
    });
}

criterion_group!(benches, bench_markdown_to_jira, bench_plain_text);
criterion_main!(benches);
