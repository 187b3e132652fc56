//! Benchmarks for HTML emission.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use rtfhtml::css::Color;
use rtfhtml::{BreakKind, Event, FormatContext, HtmlConfig, NumberingKind, Token, render_html};

/// A long stream mixing paragraphs, lists, tables and inline formatting.
fn sample_events(paragraphs: usize) -> Vec<Event> {
    let ctx = |tokens: &[Token]| tokens.iter().cloned().collect::<FormatContext>();
    let red = Token::ForegroundColor(Color::rgb(200, 0, 0));
    let mut events = Vec::new();

    for i in 0..paragraphs {
        let block = match i % 4 {
            0 => ctx(&[Token::OutlineLevel((i % 3) as u8)]),
            1 => ctx(&[Token::ParagraphNumbering, Token::ListLevelType(NumberingKind::Arabic)]),
            2 => ctx(&[Token::InTable]),
            _ => ctx(&[Token::FontSize(22)]),
        };
        for run in 0..8 {
            let mut format = block.clone();
            match run % 4 {
                0 => {}
                1 => {
                    format.add(Token::Bold);
                }
                2 => {
                    format.add(Token::Bold);
                    format.add(Token::Italic);
                }
                _ => {
                    format.add(red.clone());
                }
            }
            events.push(Event::text(format, "lorem ipsum dolor sit amet "));
        }
        let kind = if i % 4 == 2 {
            BreakKind::Cell
        } else {
            BreakKind::Paragraph
        };
        events.push(Event::Break {
            format: block,
            kind,
        });
    }
    events
}

fn bench_render_html(c: &mut Criterion) {
    let events = sample_events(500);
    c.bench_function("render_html_500_paragraphs", |b| {
        b.iter(|| render_html(&events, HtmlConfig::default()).unwrap());
    });
}

criterion_group!(benches, bench_render_html);
criterion_main!(benches);
