//! Segmenter: the public entry point

use std::sync::Arc;

use log::{debug, info, warn};

use crate::api::validation::{sanitize_entities, validate_tokens};
use crate::api::{Error, Input, Result, SegmentOptions, Segmentation};
use crate::application::{chunks_per_space, process_tokens, HtmlSerializer};
use crate::domain::{ChunkData, ChunkList, Token};
use crate::external::{
    AnnotationFile, EntityExtractor, HtmlNormalizer, ResultCache, SyntaxAnnotator,
    TextNormalizer,
};

/// Segments text into wrappable chunks and renders them as HTML.
///
/// Collaborators are shared behind `Arc`, so one segmenter can serve
/// concurrent callers; each call owns its own chunk lists.
#[derive(Clone)]
pub struct Segmenter {
    normalizer: Arc<dyn TextNormalizer>,
    annotator: Option<Arc<dyn SyntaxAnnotator>>,
    entity_extractor: Option<Arc<dyn EntityExtractor>>,
    cache: Option<Arc<dyn ResultCache>>,
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("annotator", &self.annotator.is_some())
            .field("entity_extractor", &self.entity_extractor.is_some())
            .field("cache", &self.cache.is_some())
            .finish()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Segmenter with the HTML normalizer and no annotator.
    ///
    /// Only the whitespace path is available until an annotator is attached.
    pub fn new() -> Self {
        Self {
            normalizer: Arc::new(HtmlNormalizer::new()),
            annotator: None,
            entity_extractor: None,
            cache: None,
        }
    }

    /// Segmenter that replays a saved analysis for tokens and entities
    pub fn from_annotations(annotations: AnnotationFile) -> Self {
        let annotations = Arc::new(annotations);
        Self::new()
            .with_annotator_arc(annotations.clone())
            .with_entity_extractor_arc(annotations)
    }

    pub fn with_normalizer(mut self, normalizer: impl TextNormalizer + 'static) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }

    pub fn with_annotator(self, annotator: impl SyntaxAnnotator + 'static) -> Self {
        self.with_annotator_arc(Arc::new(annotator))
    }

    pub fn with_annotator_arc(mut self, annotator: Arc<dyn SyntaxAnnotator>) -> Self {
        self.annotator = Some(annotator);
        self
    }

    pub fn with_entity_extractor(self, extractor: impl EntityExtractor + 'static) -> Self {
        self.with_entity_extractor_arc(Arc::new(extractor))
    }

    pub fn with_entity_extractor_arc(mut self, extractor: Arc<dyn EntityExtractor>) -> Self {
        self.entity_extractor = Some(extractor);
        self
    }

    pub fn with_cache(self, cache: impl ResultCache + 'static) -> Self {
        self.with_cache_arc(Arc::new(cache))
    }

    pub fn with_cache_arc(mut self, cache: Arc<dyn ResultCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Segment any [`Input`] source
    pub fn segment_input(&self, input: Input, options: &SegmentOptions) -> Result<Segmentation> {
        let source = input.into_text()?;
        self.segment(&source, options)
    }

    /// Segment a text or HTML fragment.
    ///
    /// The source is normalized to plain text, split into chunks (through
    /// the annotator, or on spaces for the whitespace language), regrouped
    /// and rendered. Annotator and extractor failures abort the call.
    pub fn segment(&self, source: &str, options: &SegmentOptions) -> Result<Segmentation> {
        options.validate()?;
        let cache_language = options.language().unwrap_or_default();

        if let Some(cached) = self.cached(source, cache_language, options) {
            debug!("cache hit for {} bytes of input", source.len());
            return Ok(cached);
        }

        let text = self.normalizer.normalize(source);
        let (chunks, tokens, language) = if options.splits_on_whitespace() {
            debug!("splitting {} chars on whitespace", text.chars().count());
            (
                chunks_per_space(&text),
                None,
                options.language().map(str::to_owned),
            )
        } else {
            let (chunks, tokens, language) = self.chunks_with_annotator(&text, options)?;
            (chunks, Some(tokens), language)
        };

        let html = HtmlSerializer::new(options.merged_attributes())
            .with_max_length(options.max_length())
            .serialize(&chunks);

        let result = Segmentation {
            chunks: chunks.iter().map(ChunkData::from).collect(),
            tokens,
            html,
            language,
        };
        info!(
            "segmented {} chars into {} chunks",
            text.chars().count(),
            result.chunks.len()
        );

        self.store(source, cache_language, options, &result);
        Ok(result)
    }

    fn chunks_with_annotator(
        &self,
        text: &str,
        options: &SegmentOptions,
    ) -> Result<(ChunkList, Vec<Token>, Option<String>)> {
        let annotator = self.annotator.as_ref().ok_or_else(|| {
            Error::Configuration(format!(
                "no syntax annotator configured for language {:?}",
                options.language().unwrap_or("auto")
            ))
        })?;

        let annotation = annotator
            .annotate(text, options.language())
            .map_err(Error::Annotation)?;
        validate_tokens(text, &annotation.tokens)?;
        let language = annotation
            .language
            .or_else(|| options.language().map(str::to_owned));

        let entities = if options.use_entities() {
            let extractor = self.entity_extractor.as_ref().ok_or_else(|| {
                Error::Configuration("entity grouping requested but no extractor configured".into())
            })?;
            let entities = extractor
                .extract_entities(text, language.as_deref())
                .map_err(Error::Entity)?;
            Some(sanitize_entities(text, entities))
        } else {
            None
        };

        let chunks = process_tokens(&annotation.tokens, entities.as_deref())?;
        Ok((chunks, annotation.tokens, language))
    }

    fn cached(
        &self,
        source: &str,
        language: &str,
        options: &SegmentOptions,
    ) -> Option<Segmentation> {
        let cache = self.cache.as_ref().filter(|_| options.use_cache())?;
        match cache.get(source, language) {
            Ok(hit) => hit,
            Err(e) => {
                warn!("cache read failed, segmenting anyway: {e}");
                None
            }
        }
    }

    fn store(&self, source: &str, language: &str, options: &SegmentOptions, result: &Segmentation) {
        let Some(cache) = self.cache.as_ref().filter(|_| options.use_cache()) else {
            return;
        };
        if let Err(e) = cache.set(source, language, result) {
            warn!("cache write failed: {e}");
        }
    }
}
