// Marian translation backend built on the rust-bert translation pipeline

use crate::config::ModelConfig;
use crate::engine::{ModelCache, Translator};
use crate::error::{Result, ServiceError};
use crate::metrics;
use crate::models::Direction;
use async_trait::async_trait;
use parking_lot::Mutex;
use rust_bert::marian::{
    MarianConfigResources, MarianModelResources, MarianSourceLanguages, MarianSpmResources,
    MarianTargetLanguages, MarianVocabResources,
};
use rust_bert::pipelines::common::{ModelResource, ModelType};
use rust_bert::pipelines::translation::{Language, TranslationConfig, TranslationModel};
use rust_bert::resources::RemoteResource;
use std::sync::Arc;
use std::time::Instant;
use tch::Device;
use tokio::task;
use tracing::info;

/// Loaded translation pipeline shared across requests.
///
/// The pipeline holds libtorch tensors and is not `Sync`; the mutex
/// serializes inference per direction while letting the handle be shared.
type Pipeline = Mutex<TranslationModel>;

/// Production engine running pretrained Marian opus-mt models.
///
/// Model/tokenizer pairs are fetched from the hub and loaded lazily, one per
/// direction, then reused for the lifetime of the engine.
pub struct MarianEngine {
    device: Device,
    cache: ModelCache<Pipeline>,
}

impl MarianEngine {
    pub fn new(config: &ModelConfig) -> Result<Self> {
        Ok(Self {
            device: parse_device(&config.device)?,
            cache: ModelCache::new(),
        })
    }

    /// Load both directions up front so first requests skip the load cost.
    pub async fn preload(&self) -> Result<()> {
        for direction in Direction::ALL {
            self.pipeline(direction).await?;
        }
        Ok(())
    }

    /// Directions whose pipeline is loaded.
    pub fn loaded_directions(&self) -> Vec<Direction> {
        self.cache.loaded()
    }

    async fn pipeline(&self, direction: Direction) -> Result<Arc<Pipeline>> {
        let device = self.device;
        self.cache
            .get_or_load(direction, || async move {
                info!(
                    direction = %direction,
                    model = direction.model_id(),
                    "loading translation model"
                );
                let started = Instant::now();
                let pipeline = task::spawn_blocking(move || load_pipeline(direction, device))
                    .await
                    .map_err(|e| ServiceError::ModelLoad(e.to_string()))??;
                metrics::record_model_load(direction.code());
                info!(
                    direction = %direction,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "model ready"
                );
                Ok(Mutex::new(pipeline))
            })
            .await
    }
}

#[async_trait]
impl Translator for MarianEngine {
    async fn translate(&self, text: &str, direction: Direction) -> Result<String> {
        let pipeline = self.pipeline(direction).await?;
        let text = text.to_owned();

        let outputs = task::spawn_blocking(move || {
            let (source, target) = language_pair(direction);
            let guard = pipeline.lock();
            guard
                .translate(&[text.as_str()], source, target)
                .map_err(|e| ServiceError::Inference(e.to_string()))
        })
        .await
        .map_err(|e| ServiceError::Inference(e.to_string()))??;

        outputs
            .into_iter()
            .next()
            .map(|s| s.trim().to_owned())
            .ok_or_else(|| ServiceError::Inference("model produced no output".to_string()))
    }
}

fn language_pair(direction: Direction) -> (Language, Language) {
    match direction {
        Direction::EnglishToArabic => (Language::English, Language::Arabic),
        Direction::ArabicToEnglish => (Language::Arabic, Language::English),
    }
}

fn parse_device(name: &str) -> Result<Device> {
    match name {
        "cpu" => Ok(Device::Cpu),
        "cuda" => Ok(Device::cuda_if_available()),
        other => Err(ServiceError::Config(format!(
            "unknown device '{other}', expected 'cpu' or 'cuda'"
        ))),
    }
}

fn load_pipeline(direction: Direction, device: Device) -> Result<TranslationModel> {
    let (model, config, vocab, spm, sources, targets) = match direction {
        Direction::EnglishToArabic => (
            MarianModelResources::ENGLISH2ARABIC,
            MarianConfigResources::ENGLISH2ARABIC,
            MarianVocabResources::ENGLISH2ARABIC,
            MarianSpmResources::ENGLISH2ARABIC,
            MarianSourceLanguages::ENGLISH2ARABIC,
            MarianTargetLanguages::ENGLISH2ARABIC,
        ),
        Direction::ArabicToEnglish => (
            MarianModelResources::ARABIC2ENGLISH,
            MarianConfigResources::ARABIC2ENGLISH,
            MarianVocabResources::ARABIC2ENGLISH,
            MarianSpmResources::ARABIC2ENGLISH,
            MarianSourceLanguages::ARABIC2ENGLISH,
            MarianTargetLanguages::ARABIC2ENGLISH,
        ),
    };

    let translation_config = TranslationConfig::new(
        ModelType::Marian,
        ModelResource::Torch(Box::new(RemoteResource::from_pretrained(model))),
        RemoteResource::from_pretrained(config),
        RemoteResource::from_pretrained(vocab),
        Some(RemoteResource::from_pretrained(spm)),
        sources,
        targets,
        device,
    );

    TranslationModel::new(translation_config).map_err(|e| ServiceError::ModelLoad(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_parsing() {
        assert!(matches!(parse_device("cpu").unwrap(), Device::Cpu));
        assert!(parse_device("tpu").is_err());
    }

    #[test]
    fn test_language_pairs_mirror_directions() {
        assert_eq!(
            language_pair(Direction::EnglishToArabic),
            (Language::English, Language::Arabic)
        );
        assert_eq!(
            language_pair(Direction::ArabicToEnglish),
            (Language::Arabic, Language::English)
        );
    }
}
