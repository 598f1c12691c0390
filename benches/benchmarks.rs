//! Performance benchmarks for timeline-menu

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use timeline_menu::test_utils::SiteBuilder;
use timeline_menu::tree::TimelineCollector;
use timeline_menu::{
    CategoryStore, NodeRenderer, RenderConfig, TimelineWidget, TreeWalker, WalkerConfig, WidgetArgs,
    WidgetConfig,
};

fn bench_walk(c: &mut Criterion) {
    let site = SiteBuilder::balanced(4, 4, 0).build();
    let root = site.find_by_name("Timeline").unwrap().unwrap();

    c.bench_function("walk_balanced_4x4", |b| {
        b.iter(|| {
            let walker = TreeWalker::new(&site, WalkerConfig::unbounded());
            walker.walk_fn(black_box(&root), |_, _| Ok(())).unwrap()
        })
    });

    c.bench_function("walk_balanced_4x4_depth_2", |b| {
        b.iter(|| {
            let walker = TreeWalker::new(&site, WalkerConfig::with_max_depth(2));
            walker.walk_fn(black_box(&root), |_, _| Ok(())).unwrap()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let site = SiteBuilder::balanced(3, 4, 8).build();
    let root = site.find_by_name("Timeline").unwrap().unwrap();

    c.bench_function("render_html_3x4_8_posts", |b| {
        b.iter(|| {
            let mut renderer = NodeRenderer::new(&site, RenderConfig::default(), Vec::new());
            TreeWalker::new(&site, WalkerConfig::default())
                .walk(black_box(&root), &mut renderer)
                .unwrap();
            renderer.into_inner()
        })
    });

    c.bench_function("collect_tree_3x4_8_posts", |b| {
        b.iter(|| {
            let mut collector = TimelineCollector::new(&site, 32);
            TreeWalker::new(&site, WalkerConfig::default())
                .walk(black_box(&root), &mut collector)
                .unwrap();
            collector.finish()
        })
    });

    let config = WidgetConfig {
        title: "Timeline".to_string(),
        root_category: "Timeline".to_string(),
        max_depth: -1,
    };
    c.bench_function("widget_render_3x4_8_posts", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            TimelineWidget::new(&site)
                .render_config(&WidgetArgs::default(), black_box(&config), &mut out)
                .unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_walk, bench_render);
criterion_main!(benches);
