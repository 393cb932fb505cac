//! Training and prediction for the TF-IDF + linear SVM sentiment model.

use std::collections::BTreeSet;

use log::info;

use crate::error::{Result, SentimentError};
use crate::ml::classifier::TextClassifier;
use crate::ml::svm::{LinearSvc, Penalty, SvmConfig};
use crate::ml::tfidf::TfIdfVectorizer;

/// A fitted vectorizer and classifier pair.
///
/// `classes` holds the two training labels in sorted order. A non-negative
/// decision value maps to `classes[1]`, a negative one to `classes[0]`.
#[derive(Debug)]
pub struct SentimentPipeline {
    vectorizer: TfIdfVectorizer,
    classifier: LinearSvc,
    classes: Vec<String>,
}

/// Train with the given penalty and regularization strength `c`.
///
/// All other solver settings take their defaults.
pub fn train(
    texts: &[String],
    labels: &[String],
    penalty: Penalty,
    c: f64,
) -> Result<SentimentPipeline> {
    let config = SvmConfig {
        penalty,
        c,
        ..SvmConfig::default()
    };
    train_with_config(texts, labels, &config)
}

/// Train with full solver settings.
pub fn train_with_config(
    texts: &[String],
    labels: &[String],
    config: &SvmConfig,
) -> Result<SentimentPipeline> {
    if texts.is_empty() {
        return Err(SentimentError::training("training set is empty"));
    }
    if texts.len() != labels.len() {
        return Err(SentimentError::training(format!(
            "got {} texts but {} labels",
            texts.len(),
            labels.len()
        )));
    }
    config.validate()?;

    let classes: Vec<String> = labels
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    match classes.len() {
        2 => {}
        1 => {
            return Err(SentimentError::training(format!(
                "training labels contain a single class '{}'; need two",
                classes[0]
            )));
        }
        n => {
            return Err(SentimentError::training(format!(
                "expected exactly two classes, found {n}: {classes:?}"
            )));
        }
    }

    let mut vectorizer = TfIdfVectorizer::english()?;
    let features = vectorizer.fit_transform(texts)?;
    let targets: Vec<f64> = labels
        .iter()
        .map(|label| if *label == classes[1] { 1.0 } else { -1.0 })
        .collect();

    let mut classifier = LinearSvc::new(config.clone());
    classifier.fit(&features, &targets, vectorizer.vocabulary_size())?;

    info!(
        "Trained {} LinearSVC (C={}) on {} reviews, {} features, classes {:?}",
        config.penalty,
        config.c,
        texts.len(),
        vectorizer.vocabulary_size(),
        classes
    );

    Ok(SentimentPipeline {
        vectorizer,
        classifier,
        classes,
    })
}

impl SentimentPipeline {
    /// Decision value for each text; non-negative means `classes[1]`.
    pub fn decision_function(&self, texts: &[String]) -> Result<Vec<f64>> {
        texts
            .iter()
            .map(|text| {
                let features = self.vectorizer.transform(text)?;
                self.classifier.decision_function(&features)
            })
            .collect()
    }

    /// Predict one label per text, in input order.
    pub fn predict(&self, texts: &[String]) -> Result<Vec<String>> {
        Ok(self
            .decision_function(texts)?
            .into_iter()
            .map(|score| {
                if score >= 0.0 {
                    self.classes[1].clone()
                } else {
                    self.classes[0].clone()
                }
            })
            .collect())
    }

    /// Labels in sorted order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of TF-IDF features.
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &LinearSvc {
        &self.classifier
    }
}

impl TextClassifier for SentimentPipeline {
    fn predict(&self, texts: &[String]) -> Result<Vec<String>> {
        SentimentPipeline::predict(self, texts)
    }

    fn classes(&self) -> &[String] {
        SentimentPipeline::classes(self)
    }

    fn name(&self) -> &str {
        "tfidf_linear_svc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn corpus() -> (Vec<String>, Vec<String>) {
        let texts = strings(&[
            "wonderful film great acting",
            "great story wonderful cast",
            "loved it great fun",
            "terrible film awful acting",
            "awful story terrible cast",
            "hated it awful mess",
        ]);
        let labels = strings(&[
            "positive", "positive", "positive", "negative", "negative", "negative",
        ]);
        (texts, labels)
    }

    #[test]
    fn test_train_and_predict_l2() {
        let (texts, labels) = corpus();
        let model = train(&texts, &labels, Penalty::L2, 1.0).unwrap();

        assert_eq!(model.classes(), &["negative", "positive"]);
        assert_eq!(model.predict(&texts).unwrap(), labels);

        let unseen = strings(&["great wonderful", "awful terrible"]);
        assert_eq!(
            model.predict(&unseen).unwrap(),
            strings(&["positive", "negative"])
        );
    }

    #[test]
    fn test_train_and_predict_l1() {
        let (texts, labels) = corpus();
        let model = train(&texts, &labels, Penalty::L1, 1.0).unwrap();
        assert_eq!(model.predict(&texts).unwrap(), labels);
    }

    #[test]
    fn test_predict_empty_input() {
        let (texts, labels) = corpus();
        let model = train(&texts, &labels, Penalty::L2, 1.0).unwrap();
        assert!(model.predict(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_trait_object() {
        let (texts, labels) = corpus();
        let model: Box<dyn TextClassifier> =
            Box::new(train(&texts, &labels, Penalty::L2, 1.0).unwrap());
        assert_eq!(model.name(), "tfidf_linear_svc");
        assert_eq!(model.classes().len(), 2);
    }

    #[test]
    fn test_training_errors() {
        let (texts, labels) = corpus();

        assert!(train(&[], &[], Penalty::L2, 1.0).is_err());
        assert!(train(&texts, &labels[..3], Penalty::L2, 1.0).is_err());

        let single = strings(&["positive"; 6]);
        assert!(matches!(
            train(&texts, &single, Penalty::L2, 1.0),
            Err(SentimentError::Training(_))
        ));

        let mut three = labels.clone();
        three[0] = "neutral".to_string();
        assert!(train(&texts, &three, Penalty::L2, 1.0).is_err());

        assert!(matches!(
            train(&texts, &labels, Penalty::L2, -1.0),
            Err(SentimentError::Config(_))
        ));

        let stop_words = strings(&["the and", "of a"]);
        let two = strings(&["positive", "negative"]);
        assert!(train(&stop_words, &two, Penalty::L2, 1.0).is_err());
    }
}
