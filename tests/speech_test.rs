//! Integration tests for speech synthesis
//!
//! These exercise the native TTS backend where one is available and are
//! tolerant of headless environments (CI has no speech engine).

use varnamala::speech::{create_synth, RATE_WPM_MAX, RATE_WPM_MIN};

#[test]
fn test_create_native_synth() {
    match create_synth() {
        Ok(synth) => {
            println!("✓ Successfully created native TTS backend");
            drop(synth);
        }
        Err(e) => {
            // Acceptable in headless environments
            println!("⚠ TTS creation failed (may be expected): {}", e);
        }
    }
}

#[test]
fn test_rate_configuration() {
    if let Ok(mut synth) = create_synth() {
        assert!(synth.set_rate_wpm(RATE_WPM_MIN).is_ok());
        assert!(synth.set_rate_wpm(150).is_ok());
        assert!(synth.set_rate_wpm(RATE_WPM_MAX).is_ok());
        println!("✓ Rate configuration tests passed");
    } else {
        println!("⚠ Skipping rate tests (TTS not available)");
    }
}

#[test]
fn test_speech_operations() {
    if let Ok(mut synth) = create_synth() {
        // Should not error even if nothing is audible
        assert!(synth.speak("नमस्ते").is_ok(), "Should speak Devanagari");
        assert!(synth.speak("").is_ok(), "Empty text is a no-op");
        assert!(synth.stop().is_ok(), "Should stop without error");
        println!("✓ Speech operation tests passed");
    } else {
        println!("⚠ Skipping operation tests (TTS not available)");
    }
}
