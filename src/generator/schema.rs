//! Wire format of the Gemini `generateContent` call and the two response schemas we send.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::model::{FACT_COUNT, QUIZ_LENGTH};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single-turn prompt whose answer must be JSON matching `schema`.
    pub fn structured(prompt: String, schema: Value) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".into(),
                response_schema: schema,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, or `None` if it carried nothing but whitespace.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }

    #[cfg(test)]
    pub fn with_text(text: &str) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: Some(text.to_string()),
                    }],
                }),
            }],
        }
    }
}

pub fn quiz_prompt() -> String {
    format!(
        "Generate {QUIZ_LENGTH} ultra-simple visual quiz questions for toddlers (aged 3-5) about orangutans. \
         Each question should be about identifying a color, a fruit, or a body part (like 'Where is the long arm?'). \
         Each question has exactly one correct option. Use plenty of emojis in the options. Keep text very short."
    )
}

pub fn facts_prompt() -> String {
    format!(
        "Generate {FACT_COUNT} super cute 'Did you know?' cards for 3-year-olds about orangutans. \
         Focus on fun things like 'They sleep in nests!' or 'They love swings!'. \
         Each card has a short title, a one-sentence fact and a single emoji. Use simple words."
    )
}

pub fn quiz_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "question": { "type": "STRING" },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "3 simple options, each with an emoji"
                },
                "correctAnswer": { "type": "STRING" },
                "explanation": {
                    "type": "STRING",
                    "description": "A one-sentence super happy explanation"
                }
            },
            "required": ["question", "options", "correctAnswer", "explanation"]
        }
    })
}

pub fn facts_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "fact": { "type": "STRING" },
                "emoji": { "type": "STRING" }
            },
            "required": ["title", "fact", "emoji"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_in_gemini_shape() {
        let req = GenerateContentRequest::structured("hi".into(), facts_schema());
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(v["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(v["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[test]
    fn schemas_require_every_field() {
        let quiz = quiz_schema();
        let required = quiz["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
        let facts = facts_schema();
        assert_eq!(facts["items"]["required"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let raw = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"[{\"a\":"},{"text":"1}]"}]},"finishReason":"STOP"}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.text().as_deref(), Some(r#"[{"a":1}]"#));
    }

    #[test]
    fn missing_or_blank_text_is_none() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.text(), None);
        assert_eq!(GenerateContentResponse::with_text("  \n").text(), None);
        let no_content: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(no_content.text(), None);
    }

    #[test]
    fn prompts_ask_for_the_configured_counts() {
        assert!(quiz_prompt().starts_with("Generate 5 "));
        assert!(facts_prompt().starts_with("Generate 6 "));
    }
}
