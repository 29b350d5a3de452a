//! Generate a behavioral report for validation testing

fn main() {
    let json = r#"{
        "facial": {
            "expressions": {
                "neutral": 45.5,
                "confused": 25.3,
                "concentrated": 15.7,
                "frustrated": 10.2,
                "happy": 3.3
            },
            "dominant_expression": "neutral",
            "confidence_score": 68.2,
            "total_frames": 150
        },
        "audio": {
            "reading_speed": 115.7,
            "speed_assessment": "Below Average",
            "hesitations": 7,
            "hesitations_per_minute": 7.8,
            "pronunciation_errors": 4,
            "speech_clarity_percentage": 80.0,
            "fluency_score": 77.0,
            "reading_rhythm_score": 72.5,
            "overall_audio_score": 74.8
        },
        "eye": {
            "fixations": 48,
            "fixations_percentage": 40.0,
            "regressions": 24,
            "regressions_percentage": 20.0,
            "saccades": 48,
            "saccades_percentage": 40.0,
            "eye_stability_percentage": 70.0,
            "saccade_efficiency_percentage": 66.7,
            "reading_efficiency_score": 52.0
        }
    }"#;

    match lexiscan::behavioral_report_json(json) {
        Ok(report) => print!("{report}"),
        Err(e) => eprintln!("Error: {e:?}"),
    }
}
