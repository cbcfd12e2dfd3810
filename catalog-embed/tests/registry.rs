use catalog_embed::{
    cosine_similarity, list_embedders, make_embedder, register_defaults, register_embedder,
    EmbedError, EmbedResult, Embedder, HashingEmbedder,
};

#[test]
fn defaults_include_hashing() {
    register_defaults();
    assert!(list_embedders().contains(&"hashing".to_string()));
    let e = make_embedder("hashing").expect("hashing registered");
    assert_eq!(e.name(), "hashing");
    assert_eq!(e.dimension(), 512);
}

#[test]
fn unknown_name_is_an_error() {
    match make_embedder("does-not-exist") {
        Err(EmbedError::UnknownEmbedder(name)) => assert_eq!(name, "does-not-exist"),
        other => panic!("expected UnknownEmbedder, got {:?}", other.map(|e| e.name())),
    }
}

fn tiny() -> EmbedResult<Box<dyn Embedder>> {
    Ok(Box::new(HashingEmbedder::with_dimension(8)?))
}

#[test]
fn custom_factories_can_be_registered() {
    register_embedder("tiny", tiny);
    let e = make_embedder("tiny").unwrap();
    assert_eq!(e.dimension(), 8);
    let batch = e.embed_batch(&["coffee beans".to_string(), "coffee maker".to_string()]).unwrap();
    assert_eq!(batch.len(), 2);
    assert!(cosine_similarity(&batch[0], &batch[1]) > 0.0);
}

#[test]
fn cosine_handles_degenerate_inputs() {
    assert_eq!(cosine_similarity(&[], &[]), 0.0);
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    assert!((cosine_similarity(&[1.0, 2.0], &[2.0, 4.0]) - 1.0).abs() < 1e-6);
}

#[test]
fn failing_factory_surfaces_its_error() {
    fn broken() -> EmbedResult<Box<dyn Embedder>> {
        Err(EmbedError::ModelLoad("weights missing".into()))
    }
    register_embedder("broken", broken);
    match make_embedder("broken") {
        Err(EmbedError::ModelLoad(msg)) => assert_eq!(msg, "weights missing"),
        other => panic!("expected ModelLoad, got {:?}", other.map(|e| e.name())),
    }
}

#[cfg(feature = "minilm")]
#[test]
fn minilm_is_registered_with_defaults() {
    register_defaults();
    assert!(list_embedders().contains(&"minilm".to_string()));
}

/// Downloads the model on first run.
#[cfg(feature = "minilm")]
#[test]
#[ignore]
fn minilm_ranks_related_text_higher() {
    register_defaults();
    let e = make_embedder("minilm").unwrap();
    assert_eq!(e.dimension(), 384);
    let q = e.embed("noise cancelling headphones").unwrap();
    let near = e.embed("Wireless headphones with premium sound").unwrap();
    let far = e.embed("Organic coffee beans, medium roast").unwrap();
    assert!(cosine_similarity(&q, &near) > cosine_similarity(&q, &far));
}
