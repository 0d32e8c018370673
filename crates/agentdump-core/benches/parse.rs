//! Parse and canonicalization throughput on a representative transcript turn.

use agentdump_core::{decode, parse};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const TURN: &str = "AssistantMessage(content=[TextBlock(text='Searching the index for \
matching sessions now.\\nThis may take a moment.'), ToolUseBlock(id='toolu_0142', \
name='grep', input={'pattern': 'session_id', 'path': '/var/log/agent', \
'max_results': 50, 'case_sensitive': False}), ToolResultBlock(tool_use_id='toolu_0142', \
content=[TextBlock(text='48 matches in 12 files')])])";

const RESULT: &str = "ResultMessage(subtype='success', duration_ms=14213, \
duration_api_ms=9120, is_error=False, num_turns=6, session_id='b3c1', \
total_cost_usd=0.0412, usage={'input_tokens': 9251, 'output_tokens': 1024, \
'cache_read_input_tokens': 8100}, result='done')";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_assistant_turn", |b| {
        b.iter(|| parse(black_box(TURN)))
    });

    c.bench_function("decode_assistant_turn", |b| {
        b.iter(|| decode(black_box(TURN)))
    });

    c.bench_function("decode_result_message", |b| {
        b.iter(|| decode(black_box(RESULT)))
    });

    // Deep nesting exercises the depth guard on every container.
    let deep = {
        let mut s = String::new();
        for _ in 0..200 {
            s.push('[');
        }
        s.push('1');
        for _ in 0..200 {
            s.push(']');
        }
        s
    };
    c.bench_function("parse_deeply_nested", |b| {
        b.iter(|| parse(black_box(&deep)))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
