//! Integration tests for tweetnorm
//!
//! Exercises the public API end to end: stage functions, composed pipelines,
//! stopword sets and resource resolution.

use std::{sync::Arc, thread};

use anyhow::Result;

use tweetnorm::preprocess::{
    blank_checker, expand_contractions, remove_all_duplication, remove_consecutive_duplication,
    remove_twitter_username, remove_url, remove_xml,
};
use tweetnorm::resource::{resource_name, ModelSize};
use tweetnorm::stopwords::{add_word_to_stopwords_set, stopwords_nltk, NltkLexicon};
use tweetnorm::{PreprocessorConfig, RawInput, Stage, TextPreprocessor, TextStage};

/// Test the reference vectors through the public stage functions
#[test]
fn test_reference_vectors() {
    let url = remove_url(Some(
        "Look at these links: www.my.com:8069/tf/details?id=com.j.o%22 and ftp://amazon.com/g/G/e/2011/u-3.jpg",
    ))
    .unwrap();
    assert_eq!(url.text, "Look at these links:  and ");
    assert_eq!(url.matches, 2);

    assert_eq!(
        remove_all_duplication(Some("Hello world world! world Hello world")).as_deref(),
        Some("Hello world world!")
    );
    assert_eq!(
        remove_consecutive_duplication(Some("this just so So so nice")).as_deref(),
        Some("this just so nice")
    );
    assert_eq!(expand_contractions(Some("I'm Amin.")).as_deref(), Some("I am Amin."));
    assert_eq!(blank_checker(Some("\n \n")), Some(true));
    assert_eq!(blank_checker(Some("\t Hello")), Some(false));

    let users = remove_twitter_username(Some("RT @Stephan007: @Devoxx If interested, the Devoxx CFP opens en…")).unwrap();
    assert_eq!(users.text, "RT :  If interested, the Devoxx CFP opens en…");
    assert_eq!(users.matches, 2);
}

/// Test that structural removal is idempotent
#[test]
fn test_remove_xml_idempotent() {
    for text in ["<a href='x'>link</a> <br/>", "no tags", "<<nested>>", "a < b > c"] {
        let once = remove_xml(Some(text)).unwrap().text;
        assert_eq!(remove_xml(Some(&once)).unwrap().text, once, "input: {}", text);
    }
}

/// Test the default tweet pipeline on a realistic post
#[test]
fn test_default_pipeline_on_tweet() {
    let pp = TextPreprocessor::new();
    let out = pp
        .process(Some("RT @Stephan007: @Devoxx If interested, the Devoxx CFP opens en…"))
        .unwrap();
    assert_eq!(out, "retweet : if interested, the devoxx cfp opens en…", "got: {}", out);
}

/// Test a configured pipeline loaded from a JSON file
#[test]
fn test_pipeline_from_file() -> Result<()> {
    let path = std::env::temp_dir().join(format!("tweetnorm-it-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "stages": ["remove_url", "remove_emoji", "to_lower", "remove_punctuation",
                       "remove_stopwords", "remove_all_duplication", "reject_blank"],
            "languages": ["english"]
        }"#,
    )?;
    let pp = TextPreprocessor::with_config(PreprocessorConfig::from_file(&path)?)?;
    std::fs::remove_file(&path).ok();

    let out = pp.process(Some("The pizza of the pizza 🔥 http://example.com/x"));
    assert_eq!(out.as_deref(), Some("pizza"));
    assert_eq!(pp.process(Some("the and of")), None);
    Ok(())
}

/// Test that invalid input short-circuits a pipeline with external stages
#[test]
fn test_invalid_input_never_reaches_stages() {
    struct Panicking;

    impl TextStage for Panicking {
        fn name(&self) -> &str {
            "panicking"
        }

        fn apply(&self, _: &str) -> Option<String> {
            panic!("must not be called")
        }
    }

    let pp = TextPreprocessor::empty().with_stage(Stage::RejectBlank).with_text_stage(Panicking);
    assert_eq!(pp.process(None), None);
    assert_eq!(pp.process_input(RawInput::Other), None);
    assert_eq!(pp.process(Some(" \t ")), None);
}

/// Test sharing one pipeline across worker threads
#[test]
fn test_shared_across_threads() {
    let pp = Arc::new(TextPreprocessor::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pp = Arc::clone(&pp);
            thread::spawn(move || pp.process(Some(&format!("Hello @user{} #t{}", i, i))))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("hello"));
    }
}

/// Test stopword set monotonicity
#[test]
fn test_stopword_additions_are_monotone() {
    let base = stopwords_nltk(&NltkLexicon, Some("english".into())).unwrap().unwrap();
    let grown = add_word_to_stopwords_set(&base, Some(vec!["RT", "Zyzzyva"].into()));
    assert!(grown.is_superset(&base));
    assert!(grown.contains("rt"));
    assert!(grown.contains("zyzzyva"));
    assert!(!base.contains("zyzzyva"));
}

/// Test language-resource resolution
#[test]
fn test_resource_names() {
    assert_eq!(resource_name("English", ModelSize::Small).as_deref(), Some("en_core_web_sm"));
    assert_eq!(resource_name("Chinese", ModelSize::Large).as_deref(), Some("zh_core_web_lg"));
    assert_eq!(resource_name("Spanish", "medium".parse().unwrap()).as_deref(), Some("es_core_news_md"));
    assert_eq!(resource_name("Esperanto", ModelSize::Small), None);
}
