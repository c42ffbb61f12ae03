use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use postcraft_markup::{MarkupRenderer, Platform, RenderOptionsBuilder, segment};

const POST_SHORT: &str = "周末去露营 ⛺️\n\n带上帐篷和咖啡\n\n#露营 #周末";

const POST_ARTICLE: &str = r"# 新手露营装备清单

第一次露营，**装备**是最让人头疼的事。

> 少即是多，只带真正需要的东西。

## 必备

- **帐篷**：选三季帐就够了
- **睡袋**：注意舒适温标
- 防潮垫

![img](0)

### 可选

- 折叠椅
- 便携咖啡壶

最后，记得**带走所有垃圾**。

#露营 #装备 #新手";

fn bench_segment(c: &mut Criterion) {
  let mut group = c.benchmark_group("segment");
  let long = POST_ARTICLE.repeat(20);
  for (name, body) in [("short", POST_SHORT), ("article", POST_ARTICLE), (
    "long",
    long.as_str(),
  )] {
    group.bench_with_input(BenchmarkId::from_parameter(name), body, |b, body| {
      b.iter(|| segment(black_box("标题"), black_box(body), 120));
    });
  }
  group.finish();
}

fn bench_render(c: &mut Criterion) {
  let mut group = c.benchmark_group("render_html");
  let renderer = MarkupRenderer::new(
    RenderOptionsBuilder::new()
      .platform(Platform::Wechat)
      .image("https://example.com/tent.png")
      .build(),
  );
  let long = POST_ARTICLE.repeat(20);
  for (name, text) in [("short", POST_SHORT), ("article", POST_ARTICLE), (
    "long",
    long.as_str(),
  )] {
    group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
      b.iter(|| renderer.render_html(black_box(text)));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_segment, bench_render);
criterion_main!(benches);
