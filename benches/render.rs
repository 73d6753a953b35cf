// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glyphtree::layout::layout_tree;
use glyphtree::render::{render_layout, render_tree, render_tree_annotated};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.tree`, `render.layout_only`, `render.annotated`
// - Case IDs come from `fixtures::Case::id`; rename wiring, never IDs.
fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.tree");
    for case in fixtures::Case::ALL {
        let tree = fixtures::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let rendered = render_tree(Some(black_box(&tree))).expect("render_tree");
                black_box(rendered.len())
            })
        });
    }
    group.finish();

    // Rasterization alone: the layout is computed once outside the timed loop.
    let mut group = c.benchmark_group("render.layout_only");
    for case in [fixtures::Case::Sample, fixtures::Case::Complete10] {
        let tree = fixtures::fixture(case);
        group.bench_function(case.id(), move |b| {
            let layout = layout_tree(Some(&tree)).expect("layout_tree");
            b.iter(|| {
                let rendered =
                    render_layout(Some(black_box(&tree)), black_box(&layout)).expect("render");
                black_box(rendered.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.annotated");
    for case in [fixtures::Case::Sample, fixtures::Case::Complete6] {
        let tree = fixtures::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let annotated =
                    render_tree_annotated(Some(black_box(&tree))).expect("render_tree_annotated");
                black_box(annotated.highlight_index.len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
