//! Prompt assembly for the text generation service.
//!
//! The service itself is external; this module only builds the strings sent
//! to it. The reply format requested by [`SYSTEM_PROMPT`] is the one parsed
//! by [`crate::response::parse_response`].
use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// System instruction sent with every generation request.
pub const SYSTEM_PROMPT: &str = "\
你是一名专业的小红书内容创作者，熟悉平台推荐机制与笔记结构。

请生成可以直接发布的图文笔记，并遵守以下规则：

【平台结构】
1. 标题不超过 20 个汉字
2. 以真实用户第一视角叙述
3. 不出现 AI、模型、生成 等字样
4. 前 3 行要有吸引力
5. 多用短句和空行
6. 每段不超过 2 行

【内容风控】
- 不出现营销引导、联系方式或极限承诺
- 使用经验分享的语气

【输出格式】
【标题】
xxx

【正文】
xxx

【话题】
#xxx #xxx #xxx
";

/// Instruction used by [`build_rewrite_prompt`] when none is given.
pub const DEFAULT_REWRITE_INSTRUCTION: &str = "优化这段文字，使其更具吸引力";

/// Placeholder used when no extra information is supplied.
const NO_EXTRA_INFO: &str = "无";

/// Errors that can occur while assembling a prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
  #[error("Topic must not be empty")]
  EmptyTopic,
}

/// Content toggles for a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Independent content toggles"
)]
pub struct GenerationOptions {
  /// Quote the title once at the start of the body.
  pub quote_title:       bool,
  /// Ask for plenty of emoji.
  pub use_emoji:         bool,
  /// Ask for 8-15 hashtags at the end of the body.
  pub add_hashtags:      bool,
  /// Ask the model to filter prohibited words.
  pub filter_prohibited: bool,
  /// Ask the model to avoid hard-sell marketing language.
  pub filter_marketing:  bool,
}

impl Default for GenerationOptions {
  fn default() -> Self {
    Self {
      quote_title:       false,
      use_emoji:         true,
      add_hashtags:      true,
      filter_prohibited: false,
      filter_marketing:  false,
    }
  }
}

/// Parameters of a single generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
  pub topic:      String,
  pub extra_info: String,
  pub post_type:  String,
  pub word_count: String,
  pub options:    GenerationOptions,
}

/// Build the user prompt for a generation request.
///
/// # Errors
///
/// Returns [`PromptError::EmptyTopic`] if the topic is empty or whitespace.
///
/// # Examples
///
/// ```
/// use postcraft_markup::{GenerationRequest, prompt::build_prompt};
///
/// let request = GenerationRequest {
///   topic: "手冲咖啡".to_string(),
///   ..Default::default()
/// };
/// let prompt = build_prompt(&request).unwrap_or_default();
/// assert!(prompt.contains("手冲咖啡"));
/// ```
pub fn build_prompt(request: &GenerationRequest) -> Result<String, PromptError> {
  let topic = request.topic.trim();
  if topic.is_empty() {
    return Err(PromptError::EmptyTopic);
  }

  let extra_info = match request.extra_info.trim() {
    "" => NO_EXTRA_INFO,
    extra => extra,
  };

  let mut prompt = String::from("请根据以下要求创作小红书笔记：\n\n");
  let _ = writeln!(prompt, "1. 主题/产品名称: {topic}");
  let _ = writeln!(prompt, "2. 笔记类型: {}", request.post_type.trim());
  let _ = writeln!(prompt, "3. 字数要求: {}", request.word_count.trim());
  let _ = writeln!(prompt, "4. 补充信息/核心卖点: {extra_info}");
  prompt.push_str("\n【内容要求】\n");

  let options = &request.options;
  prompt.push_str(if options.use_emoji {
    "- 必须使用丰富的Emoji表情符号，增加趣味性。\n"
  } else {
    "- 尽量少用Emoji。\n"
  });
  prompt.push_str(if options.add_hashtags {
    "- 结尾必须包含8-15个相关话题标签。\n"
  } else {
    "- 结尾不要包含话题标签。\n"
  });
  if options.filter_prohibited {
    prompt.push_str("- 严格过滤违禁词，确保内容安全合规。\n");
  }
  if options.filter_marketing {
    prompt.push_str("- 避免过于生硬的营销词汇，使用真实分享的语气。\n");
  }
  if options.quote_title {
    prompt.push_str("- 正文开头请引用一次标题。\n");
  }

  Ok(prompt)
}

/// Build the prompt used to rewrite a passage of an existing post.
#[must_use]
pub fn build_rewrite_prompt(content: &str, instruction: Option<&str>) -> String {
  let instruction = instruction
    .map(str::trim)
    .filter(|i| !i.is_empty())
    .unwrap_or(DEFAULT_REWRITE_INSTRUCTION);

  format!(
    "原始内容: \"{content}\"\n\n修改指令: {instruction}\n\n\
     请只返回修改后的内容，不要包含任何解释或前缀后缀。保持小红书的风格（口语化、Emoji）。\n"
  )
}
