//! Client for the external content generator.
//!
//! Both operations fail soft: every failure is logged and turns into an empty
//! list, so screens only ever see well-formed records or nothing.

pub mod schema;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::model::{FunFact, QuestionDefect, QuizQuestion};
use schema::{GenerateContentRequest, GenerateContentResponse};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no API key configured for the generation service")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("generation service answered with HTTP {0}")]
    Status(u16),
    #[error("response carried no text")]
    EmptyBody,
    #[error("payload did not match the schema: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("question {index} is invalid: {defect}")]
    InvalidQuestion {
        index: usize,
        #[source]
        defect: QuestionDefect,
    },
}

/// Sends one structured generation request.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerateError>;
}

/// HTTP transport to the Gemini REST API.
#[derive(Clone, Debug)]
pub struct GeminiTransport {
    config: GeneratorConfig,
}

impl GeminiTransport {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Transport for GeminiTransport {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerateError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerateError::MissingApiKey)?;
        log::debug!("generateContent with model {}", self.config.model);
        let response = Request::post(&self.config.request_url(key))
            .json(request)?
            .send()
            .await?;
        if !response.ok() {
            return Err(GenerateError::Status(response.status()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

pub struct ContentGenerator<T> {
    transport: T,
}

impl ContentGenerator<GeminiTransport> {
    pub fn from_build_env() -> Self {
        Self::new(GeminiTransport::new(GeneratorConfig::from_build_env()))
    }
}

impl<T: Transport> ContentGenerator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn fetch_quiz(&self) -> Vec<QuizQuestion> {
        fail_soft("quiz questions", self.try_fetch_quiz().await)
    }

    pub async fn fetch_facts(&self) -> Vec<FunFact> {
        fail_soft("fun facts", self.try_fetch_facts().await)
    }

    pub async fn try_fetch_quiz(&self) -> Result<Vec<QuizQuestion>, GenerateError> {
        let text = self
            .generate_text(schema::quiz_prompt(), schema::quiz_schema())
            .await?;
        decode_quiz(&text)
    }

    pub async fn try_fetch_facts(&self) -> Result<Vec<FunFact>, GenerateError> {
        let text = self
            .generate_text(schema::facts_prompt(), schema::facts_schema())
            .await?;
        decode_facts(&text)
    }

    async fn generate_text(
        &self,
        prompt: String,
        schema: serde_json::Value,
    ) -> Result<String, GenerateError> {
        let request = GenerateContentRequest::structured(prompt, schema);
        let response = self.transport.generate(&request).await?;
        response.text().ok_or(GenerateError::EmptyBody)
    }
}

fn decode_records<R: DeserializeOwned>(text: &str) -> Result<Vec<R>, GenerateError> {
    Ok(serde_json::from_str(text.trim())?)
}

/// Decodes and checks every question; one bad record rejects the whole set.
pub fn decode_quiz(text: &str) -> Result<Vec<QuizQuestion>, GenerateError> {
    let questions: Vec<QuizQuestion> = decode_records(text)?;
    for (index, q) in questions.iter().enumerate() {
        q.validate()
            .map_err(|defect| GenerateError::InvalidQuestion { index, defect })?;
    }
    Ok(questions)
}

pub fn decode_facts(text: &str) -> Result<Vec<FunFact>, GenerateError> {
    decode_records(text)
}

fn fail_soft<R>(what: &str, result: Result<Vec<R>, GenerateError>) -> Vec<R> {
    match result {
        Ok(items) => {
            log::info!("generated {} {what}", items.len());
            items
        }
        Err(e) => {
            log::error!("could not generate {what}: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RoundGuard;
    use pollster::block_on;
    use std::cell::RefCell;

    const QUIZ: &str = r#"[
        {"question":"What colour is my fur?","options":["🟠 Orange","🔵 Blue","🟣 Purple"],"correctAnswer":"🟠 Orange","explanation":"Orange like a sunset!"},
        {"question":"What do I love to eat?","options":["🍌 Banana","🧱 Brick","🧦 Sock"],"correctAnswer":"🍌 Banana","explanation":"Yummy bananas!"}
    ]"#;

    const FACTS: &str = r#"[
        {"title":"Nest builders","fact":"They sleep in cosy nests!","emoji":"🪺"},
        {"title":"Long arms","fact":"Their arms are super long!","emoji":"💪"}
    ]"#;

    /// Replays one canned outcome and remembers what was sent.
    struct Scripted {
        body: Option<&'static str>,
        sent: RefCell<Vec<GenerateContentRequest>>,
    }

    impl Scripted {
        fn answering(body: &'static str) -> Self {
            Self {
                body: Some(body),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                body: None,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Scripted {
        async fn generate(
            &self,
            request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, GenerateError> {
            self.sent.borrow_mut().push(request.clone());
            match self.body {
                Some(text) => Ok(GenerateContentResponse::with_text(text)),
                None => Err(GenerateError::Status(503)),
            }
        }
    }

    #[test]
    fn quiz_decodes_and_every_answer_is_an_option() {
        let client = ContentGenerator::new(Scripted::answering(QUIZ));
        let quiz = block_on(client.fetch_quiz());
        assert_eq!(quiz.len(), 2);
        assert!(quiz.iter().all(|q| q.has_option(&q.correct_answer)));
        let sent = client.transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].generation_config.response_schema,
            schema::quiz_schema()
        );
    }

    #[test]
    fn facts_decode_in_generation_order() {
        let client = ContentGenerator::new(Scripted::answering(FACTS));
        let facts = block_on(client.fetch_facts());
        let titles: Vec<&str> = facts.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Nest builders", "Long arms"]);
    }

    #[test]
    fn missing_required_field_yields_empty() {
        let client = ContentGenerator::new(Scripted::answering(
            r#"[{"question":"Q","options":["a","b"],"explanation":"no answer"}]"#,
        ));
        assert!(block_on(client.fetch_quiz()).is_empty());
        let facts = ContentGenerator::new(Scripted::answering(
            r#"[{"title":"ok","fact":"fine","emoji":"🦧"},{"title":"no emoji","fact":"x"}]"#,
        ));
        assert!(block_on(facts.fetch_facts()).is_empty());
    }

    #[test]
    fn one_invalid_question_rejects_the_set() {
        let text = r#"[
            {"question":"ok","options":["a","b"],"correctAnswer":"a","explanation":"x"},
            {"question":"bad","options":["a","b"],"correctAnswer":"c","explanation":"x"}
        ]"#;
        let err = decode_quiz(text).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidQuestion { index: 1, .. }));
        assert!(block_on(ContentGenerator::new(Scripted::answering(text)).fetch_quiz()).is_empty());
    }

    #[test]
    fn transport_failure_and_junk_fail_soft() {
        assert!(block_on(ContentGenerator::new(Scripted::failing()).fetch_quiz()).is_empty());
        assert!(block_on(ContentGenerator::new(Scripted::failing()).fetch_facts()).is_empty());
        let junk = ContentGenerator::new(Scripted::answering("Sure! Here are some facts:"));
        assert!(matches!(
            block_on(junk.try_fetch_facts()),
            Err(GenerateError::Decode(_))
        ));
    }

    #[test]
    fn blank_body_is_empty_body_error() {
        let client = ContentGenerator::new(Scripted::answering("   "));
        assert!(matches!(
            block_on(client.try_fetch_quiz()),
            Err(GenerateError::EmptyBody)
        ));
    }

    #[test]
    fn missing_key_fails_before_any_request() {
        let transport = GeminiTransport::new(GeneratorConfig {
            api_key: None,
            ..GeneratorConfig::default()
        });
        let client = ContentGenerator::new(transport);
        assert!(matches!(
            block_on(client.try_fetch_quiz()),
            Err(GenerateError::MissingApiKey)
        ));
    }

    #[test]
    fn reentered_quiz_asks_again_and_drops_the_left_round() {
        let client = ContentGenerator::new(Scripted::answering(QUIZ));
        let guard = RoundGuard::default();
        let mut loaded = Vec::new();

        guard.activate(1);
        let left_mid_flight = async {
            let quiz = client.fetch_quiz().await;
            guard.retire();
            quiz
        };
        assert!(!block_on(guard.deliver(1, left_mid_flight, |q| loaded.push((1, q.len())))));

        guard.activate(2);
        assert!(block_on(guard.deliver(2, client.fetch_quiz(), |q| loaded.push((2, q.len())))));

        assert_eq!(loaded, vec![(2, 2)]);
        assert_eq!(client.transport.sent.borrow().len(), 2);
    }

    #[test]
    fn empty_array_is_a_valid_result() {
        assert!(decode_quiz("[]").unwrap().is_empty());
        assert!(decode_facts(" [] ").unwrap().is_empty());
    }
}
