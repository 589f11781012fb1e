// Tests for the default audio stream session and its property bag

use anyhow::Result;
use speech_factory::{
    query_interface, AudioSource, AudioStreamFormat, AudioStreamSession, AudioStreamSessionInit,
    ClassName, NamedProperties, ObjectRegistry, PropertyBag, PropertyId, PushAudioInputStream,
    Recognizer, RecognizerKind, Session, Site, SpeechError,
};
use std::path::Path;
use std::sync::Arc;

fn new_session() -> Result<(Arc<dyn Session>, Arc<dyn AudioStreamSessionInit>, Arc<dyn Site>)> {
    let object = AudioStreamSession::create(None)?;
    let session = query_interface::<dyn Session>(&object).expect("session interface");
    let init = query_interface::<dyn AudioStreamSessionInit>(&object).expect("init interface");
    let site = query_interface::<dyn Site>(&object).expect("site interface");
    Ok((session, init, site))
}

fn new_recognizer(kind: RecognizerKind, site: &Arc<dyn Site>) -> Result<Arc<dyn Recognizer>> {
    let registry = ObjectRegistry::with_defaults();
    let recognizer = registry
        .create_as::<dyn Recognizer>(kind.class_name(), Some(Arc::clone(site)))?
        .expect("recognizer interface");
    Ok(recognizer)
}

#[test]
fn test_new_session_has_no_audio_source() -> Result<()> {
    let (session, _init, _site) = new_session()?;

    assert!(session.audio_source()?.is_none());
    assert!(session.recognizers()?.is_empty());
    assert!(session.properties().entries()?.is_empty());

    Ok(())
}

#[test]
fn test_audio_source_is_set_once() -> Result<()> {
    let (session, init, _site) = new_session()?;

    init.init_from_file(Path::new("meeting.wav"))?;

    let err = init
        .init_from_microphone()
        .expect_err("second init should fail");
    match err {
        SpeechError::AlreadyInitialized(existing) => assert_eq!(existing, "file:meeting.wav"),
        other => panic!("Expected AlreadyInitialized, got {:?}", other),
    }

    // The first source is kept
    match session.audio_source()? {
        Some(AudioSource::File(path)) => assert_eq!(path, Path::new("meeting.wav")),
        other => panic!("Expected file source, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_stream_source_keeps_format() -> Result<()> {
    let (session, init, _site) = new_session()?;
    let format = AudioStreamFormat {
        sample_rate: 44100,
        bits_per_sample: 16,
        channels: 2,
    };

    init.init_from_stream(Arc::new(PushAudioInputStream::new(format)))?;

    let source = session.audio_source()?.expect("source set");
    assert_eq!(source.to_string(), "stream:44100Hz/16bit/2ch");

    Ok(())
}

#[test]
fn test_recognizer_requires_initialized_audio() -> Result<()> {
    let (session, init, site) = new_session()?;
    let recognizer = new_recognizer(RecognizerKind::Speech, &site)?;

    let err = session
        .add_recognizer(Arc::clone(&recognizer))
        .expect_err("attach before init should fail");
    assert!(matches!(err, SpeechError::NotInitialized));

    init.init_from_microphone()?;
    session.add_recognizer(Arc::clone(&recognizer))?;
    assert_eq!(session.recognizers()?.len(), 1);

    // The session does not keep a recognizer alive on its own
    drop(recognizer);
    assert!(session.recognizers()?.is_empty());

    Ok(())
}

#[test]
fn test_session_holds_several_recognizers() -> Result<()> {
    let (session, init, site) = new_session()?;
    init.init_from_microphone()?;

    let speech = new_recognizer(RecognizerKind::Speech, &site)?;
    let intent = new_recognizer(RecognizerKind::Intent, &site)?;
    session.add_recognizer(Arc::clone(&speech))?;
    session.add_recognizer(Arc::clone(&intent))?;

    let kinds: Vec<_> = session.recognizers()?.iter().map(|r| r.kind()).collect();
    assert_eq!(kinds, vec![RecognizerKind::Speech, RecognizerKind::Intent]);

    drop(speech);
    let kinds: Vec<_> = session.recognizers()?.iter().map(|r| r.kind()).collect();
    assert_eq!(kinds, vec![RecognizerKind::Intent]);

    Ok(())
}

#[test]
fn test_recognizer_enable_disable() -> Result<()> {
    let (_session, _init, site) = new_session()?;
    let recognizer = new_recognizer(RecognizerKind::Translation, &site)?;

    assert!(recognizer.is_enabled());
    recognizer.disable();
    assert!(!recognizer.is_enabled());
    assert!(!recognizer.summary().enabled);
    recognizer.enable();
    assert!(recognizer.is_enabled());

    Ok(())
}

#[test]
fn test_recognizer_writes_reach_session_properties() -> Result<()> {
    let (session, _init, site) = new_session()?;
    let recognizer = new_recognizer(RecognizerKind::Speech, &site)?;

    recognizer.properties()?.set_by_id(PropertyId::RecoLanguage, "nb-NO")?;

    assert_eq!(
        session.properties().get_by_id(PropertyId::RecoLanguage)?.as_deref(),
        Some("nb-NO")
    );
    assert_eq!(recognizer.session()?.id(), session.id());

    Ok(())
}

#[test]
fn test_summary_serializes() -> Result<()> {
    let (session, init, site) = new_session()?;
    init.init_from_microphone()?;
    let recognizer = new_recognizer(RecognizerKind::Intent, &site)?;
    session.add_recognizer(Arc::clone(&recognizer))?;
    session.properties().set_by_id(PropertyId::RecoLanguage, "en-IN")?;

    let summary = session.summary()?;
    assert_eq!(summary.session_id, session.id());
    assert_eq!(summary.audio_source.as_deref(), Some("microphone"));
    assert_eq!(summary.recognizers.len(), 1);
    assert_eq!(summary.recognizers[0].id, recognizer.id());

    let json = serde_json::to_string(&summary)?;
    assert!(json.contains("\"kind\":\"intent\""));
    assert!(json.contains("\"SPEECH-RecoLanguage\":\"en-IN\""));

    Ok(())
}

#[test]
fn test_property_bag_parent_fallback() -> Result<()> {
    let parent = Arc::new(PropertyBag::seeded([
        ("SPEECH-RecoLanguage", "en-US"),
        ("SPEECH-Region", "westus"),
    ]));
    let child = PropertyBag::with_parent(parent.clone());

    assert_eq!(child.get_string_value("SPEECH-Region")?.as_deref(), Some("westus"));

    child.set_by_id(PropertyId::RecoLanguage, "fi-FI")?;
    assert_eq!(child.get_by_id(PropertyId::RecoLanguage)?.as_deref(), Some("fi-FI"));
    assert_eq!(parent.get_by_id(PropertyId::RecoLanguage)?.as_deref(), Some("en-US"));

    let entries = child.entries()?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries["SPEECH-RecoLanguage"], "fi-FI");
    assert!(child.has_string_value("SPEECH-Region")?);
    assert!(!child.has_string_value("SPEECH-Missing")?);

    Ok(())
}

#[test]
fn test_property_bag_overwrites() -> Result<()> {
    let bag = PropertyBag::new();

    bag.set_string_value("TRANSLATION-Voice", "a")?;
    bag.set_string_value("TRANSLATION-Voice", "b")?;

    assert_eq!(bag.get_string_value("TRANSLATION-Voice")?.as_deref(), Some("b"));
    assert_eq!(bag.entries()?.len(), 1);

    Ok(())
}

#[test]
fn test_session_created_with_registry_site_chain() -> Result<()> {
    let registry = ObjectRegistry::with_defaults();
    let object = registry.create(ClassName::AudioStreamSession, None)?;

    assert!(query_interface::<dyn AudioStreamSessionInit>(&object).is_some());

    Ok(())
}
