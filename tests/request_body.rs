use std::path::PathBuf;

use chrono::{Local, TimeZone};

use jarvis_tools::synth::{
    AudioFormat, ImageQuality, ImageRequest, ImageSize, ImageStyle, SpeechModel, SpeechRequest,
    SynthesisResult, Voice, IMAGE_MODEL,
};

fn sample_speech(speed: f64) -> SpeechRequest {
    SpeechRequest::build(
        "Hello there",
        Voice::Nova,
        SpeechModel::Tts1,
        AudioFormat::Mp3,
        speed,
        "workspace/generated_audio",
        "jarvis",
    )
}

#[test]
fn speech_body_carries_all_parameters() {
    let body = sample_speech(1.0).body();

    assert_eq!(body["model"], "tts-1");
    assert_eq!(body["input"], "Hello there");
    assert_eq!(body["voice"], "nova");
    assert_eq!(body["response_format"], "mp3");
    assert_eq!(body["speed"], 1.0);
}

// The documented range is [0.25, 4.0] but the service is the authority:
// out-of-range speeds must be forwarded without local clamping or rejection.
#[test]
fn out_of_range_speed_is_forwarded_unclamped() {
    let body = sample_speech(5.0).body();
    assert_eq!(body["speed"], 5.0);

    let body = sample_speech(0.1).body();
    assert_eq!(body["speed"], 0.1);
}

#[test]
fn output_path_uses_prefix_timestamp_and_format() {
    let request = sample_speech(1.0);
    let now = Local.with_ymd_and_hms(2026, 8, 30, 12, 34, 56).unwrap();
    assert_eq!(
        request.output_path(now),
        PathBuf::from("workspace/generated_audio/jarvis_20260830_123456.mp3")
    );
}

#[test]
fn empty_prefix_falls_back_to_speech() {
    let request = SpeechRequest::build(
        "text",
        Voice::Alloy,
        SpeechModel::Tts1Hd,
        AudioFormat::Wav,
        1.0,
        "out",
        "",
    );
    let now = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(
        request.output_path(now),
        PathBuf::from("out/speech_20260102_030405.wav")
    );
}

#[test]
fn explicit_output_file_overrides_generated_name() {
    let request = sample_speech(1.0).with_output_file("custom/reply.mp3");
    let now = Local.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap();
    assert_eq!(request.output_path(now), PathBuf::from("custom/reply.mp3"));
}

#[test]
fn image_body_carries_all_parameters() {
    let request = ImageRequest::build(
        "a lighthouse at dusk",
        ImageSize::Landscape,
        ImageQuality::Hd,
        ImageStyle::Natural,
        "workspace/generated_images",
        "image",
    );
    let body = request.body();

    assert_eq!(body["model"], IMAGE_MODEL);
    assert_eq!(body["prompt"], "a lighthouse at dusk");
    assert_eq!(body["n"], 1);
    assert_eq!(body["size"], "1792x1024");
    assert_eq!(body["quality"], "hd");
    assert_eq!(body["style"], "natural");
}

#[test]
fn result_envelope_serializes_all_fields() {
    let ok = SynthesisResult::saved("hi", PathBuf::from("out/a.mp3"));
    let value = serde_json::to_value(&ok).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["text"], "hi");
    assert_eq!(value["saved_path"], "out/a.mp3");
    assert!(value["image_url"].is_null());
    assert!(value["error"].is_null());

    let err = SynthesisResult::failed("hi", "API error (401): bad key");
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["success"], false);
    assert!(value["saved_path"].is_null());
    assert_eq!(value["error"], "API error (401): bad key");
}
