use postcraft_markup::{
  MarkupRenderer,
  Platform,
  RenderOptionsBuilder,
  render,
  render_html,
};

/// Check if HTML output contains all expected substrings.
fn assert_html_contains(html: &str, expected: &[&str]) {
  for &needle in expected {
    assert!(
      html.contains(needle),
      "Expected HTML to contain '{needle}', but it did not.\nFull HTML:\n{html}"
    );
  }
}

fn html_for(md: &str, platform: Platform, images: &[&str]) -> String {
  let mut builder = RenderOptionsBuilder::new().platform(platform);
  for image in images {
    builder = builder.image(*image);
  }
  MarkupRenderer::new(builder.build()).render_html(md)
}

#[test]
fn test_heading_levels_map_to_tags() {
  let html = html_for("# One\n\n###### Six", Platform::Wechat, &[]);
  assert_html_contains(&html, &[
    r#"<h1 class="wechat-h1">One</h1>"#,
    r#"<h6 class="wechat-h6">Six</h6>"#,
  ]);
}

#[test]
fn test_each_platform_uses_its_own_classes() {
  for platform in Platform::ALL {
    let html = html_for("text **bold**", platform, &[]);
    let key = platform.key();
    assert_eq!(
      html,
      format!(
        "<p class=\"{key}-paragraph\">text <strong \
         class=\"{key}-bold\">bold</strong></p>"
      )
    );
  }
}

#[test]
fn test_quote_and_list() {
  let html = html_for("> said\n\n- a\n- b", Platform::Toutiao, &[]);
  assert_eq!(
    html,
    "<blockquote class=\"toutiao-quote\">said</blockquote>\n<ul \
     class=\"toutiao-list\"><li class=\"toutiao-list-item\">a</li><li \
     class=\"toutiao-list-item\">b</li></ul>"
  );
}

#[test]
fn test_image_block_resolves_url() {
  let html = html_for("![img](1)", Platform::Baijiahao, &["a.png", "b.png"]);
  assert_eq!(
    html,
    "<figure class=\"baijiahao-figure\"><img class=\"baijiahao-image\" \
     src=\"b.png\" alt=\"\"></figure>"
  );
}

#[test]
fn test_out_of_range_image_renders_nothing() {
  assert_eq!(html_for("![img](0)", Platform::Seo, &[]), "");
  assert_eq!(
    html_for("a ![img](5) b", Platform::Seo, &["x.png"]),
    "<p class=\"seo-paragraph\">a  b</p>"
  );
}

#[test]
fn test_text_is_escaped() {
  let html = html_for("<script>alert(1)</script> & **<b>**", Platform::Sohu, &[]);
  assert!(!html.contains("<script>"), "got: {html}");
  assert_html_contains(&html, &["&lt;script&gt;", "&amp;", "&lt;b&gt;"]);
}

#[test]
fn test_paragraph_newlines_become_breaks() {
  let html = html_for("one\ntwo", Platform::Xiaohongshu, &[]);
  assert_eq!(html, "<p class=\"xiaohongshu-paragraph\">one<br>two</p>");
}

#[test]
fn test_free_function_matches_renderer() {
  let md = "## T\nbody\n\n![img](0)";
  let images = vec!["a.png".to_string()];
  let blocks = render(md, &images);
  assert_eq!(
    render_html(&blocks, &images, Platform::Wechat),
    html_for(md, Platform::Wechat, &["a.png"])
  );
}
