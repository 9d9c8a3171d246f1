//! Project records: the namespace a workflow graph is loaded under.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// LLM provider a project's agents are configured against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    #[default]
    OpenRouter,
    Gemini,
    OpenAi,
    Anthropic,
}

impl std::fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelProvider::OpenRouter => write!(f, "openrouter"),
            ModelProvider::Gemini => write!(f, "gemini"),
            ModelProvider::OpenAi => write!(f, "openai"),
            ModelProvider::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl FromStr for ModelProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openrouter" => Ok(ModelProvider::OpenRouter),
            "gemini" => Ok(ModelProvider::Gemini),
            "openai" => Ok(ModelProvider::OpenAi),
            "anthropic" => Ok(ModelProvider::Anthropic),
            _ => bail!(
                "Unknown model provider: {s}. Expected one of: openrouter, gemini, openai, anthropic"
            ),
        }
    }
}

/// Response language for a project's agents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "pt-br")]
    Pt,
    En,
    Es,
    Fr,
}

impl Language {
    /// Human-readable language name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Pt => "português brasileiro",
            Language::En => "English",
            Language::Es => "español",
            Language::Fr => "français",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Pt => write!(f, "pt"),
            Language::En => write!(f, "en"),
            Language::Es => write!(f, "es"),
            Language::Fr => write!(f, "fr"),
        }
    }
}

fn default_model_name() -> String {
    "openrouter/gpt-4o-mini".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub model_provider: ModelProvider,
    pub model_name: String,
    pub language: Language,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub model_provider: ModelProvider,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default)]
    pub language: Language,
}

/// Partial update: absent fields stay unchanged, present fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProjectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_provider: Option<ModelProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl UpdateProjectRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.model_provider.is_none()
            && self.model_name.is_none()
            && self.language.is_none()
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pt" | "pt-br" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            _ => bail!("Unknown language: {s}. Expected one of: pt, en, es, fr"),
        }
    }
}

impl From<&Project> for CreateProjectRequest {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            model_provider: project.model_provider,
            model_name: project.model_name.clone(),
            language: project.language,
        }
    }
}

impl Project {
    pub fn new(request: CreateProjectRequest) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            description: request.description,
            model_provider: request.model_provider,
            model_name: request.model_name,
            language: request.language,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Returns `true` if anything was present to apply.
    pub fn apply_update(&mut self, update: UpdateProjectRequest) -> bool {
        if update.is_empty() {
            return false;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(provider) = update.model_provider {
            self.model_provider = provider;
        }
        if let Some(model_name) = update.model_name {
            self.model_name = model_name;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
        self.updated_at = Utc::now();
        true
    }
}

/// Project record enriched with aggregate counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    #[serde(flatten)]
    pub project: Project,
    pub agents_count: usize,
    pub tasks_count: usize,
    pub executions_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_execution_at: Option<DateTime<Utc>>,
}
