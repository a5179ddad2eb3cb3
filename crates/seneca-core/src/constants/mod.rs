// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Landmark indices, backend endpoints, limits, defaults, and user-facing message text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Pose landmark indices (fixed contract of the external detector)
pub mod landmarks;

/// Backend API paths
pub mod endpoints {
    /// Login endpoint
    pub const LOGIN: &str = "/api/login";
    /// Chat endpoint
    pub const CHAT: &str = "/api/chat";
    /// Voice fatigue prediction endpoint (multipart)
    pub const PREDICT_FATIGUE: &str = "/api/predict-fatigue";
    /// Food image analysis endpoint
    pub const ANALYZE_FOOD: &str = "/api/analyze-food";
    /// Local proxy route that forwards to [`ANALYZE_FOOD`]
    pub const FOOD_ANALYZER_PROXY: &str = "/api/food_analyzer";
}

/// Service names used in logs and error messages
pub mod service_names {
    /// Name of this client in structured logs
    pub const SENECA_COACH: &str = "seneca-coach";
    /// Name of the remote coaching backend
    pub const COACHING_BACKEND: &str = "Coaching backend";
}

/// Default configuration values
pub mod defaults {
    /// Backend base URL when none is configured
    pub const API_BASE_URL: &str = "http://localhost:8000";
    /// User ID used for food analysis when none is configured
    pub const USER_ID: &str = "user_00001";
    /// Default request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Minimum time a position must be held before a transition counts (ms)
    pub const REP_MIN_HOLD_MS: u64 = 500;
    /// Default camera frame width in pixels
    pub const FRAME_WIDTH: u32 = 640;
    /// Default camera frame height in pixels
    pub const FRAME_HEIGHT: u32 = 480;
    /// Port for the local food analysis proxy
    pub const PROXY_PORT: u16 = 3000;
}

/// Input limits
pub mod limits {
    /// Largest accepted food photo (10 MiB)
    pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;
}

/// Voice clip format expected by the fatigue model
pub mod audio {
    /// Target sample rate in Hz
    pub const FATIGUE_SAMPLE_RATE: u32 = 8_000;
    /// Bits per PCM sample
    pub const BITS_PER_SAMPLE: u16 = 16;
    /// Multipart field name
    pub const FORM_FIELD: &str = "audio";
    /// File name sent with the multipart part
    pub const FILE_NAME: &str = "voice.wav";
    /// MIME type of the multipart part
    pub const MIME_TYPE: &str = "audio/wav";
}

/// Daily nutrition targets
pub mod nutrition {
    /// Calorie target (kcal)
    pub const CALORIE_TARGET: f64 = 2_200.0;
    /// Protein target (g)
    pub const PROTEIN_TARGET_G: f64 = 120.0;
    /// Carbohydrate target (g)
    pub const CARBS_TARGET_G: f64 = 200.0;
    /// Fat target (g)
    pub const FAT_TARGET_G: f64 = 80.0;
    /// Water target (glasses)
    pub const WATER_TARGET_GLASSES: u32 = 8;
    /// Progress at or above this percentage is on target
    pub const ON_TARGET_PERCENT: f64 = 90.0;
    /// Progress at or above this percentage is close to target
    pub const CLOSE_PERCENT: f64 = 70.0;
    /// Names given to meals in the order they are logged
    pub const MEAL_NAMES: [&str; 5] = ["Breakfast", "Lunch", "Snack", "Dinner", "Late Night"];
}

/// Static user-facing text
pub mod messages {
    /// Shown when login cannot reach the backend
    pub const LOGIN_CONNECTION_ERROR: &str =
        "Failed to connect to the server. Please make sure the backend is running.";
    /// Coach reply appended when a chat request fails
    pub const CHAT_CONNECTION_ERROR: &str = "Sorry, I'm having trouble connecting to the server. Please make sure the backend is running and try again.";
    /// Appended to the backend's login message to greet the user
    pub const WELCOME_SUFFIX: &str = "I'm your AI fitness coach and I have access to your personal fitness data. How can I help you today?";
    /// Fatigue model says the user sounds tired
    pub const FATIGUE_TIRED: &str = "You sound tired!";
    /// Fatigue model says the user sounds rested
    pub const FATIGUE_ENERGETIC: &str = "You sound energetic!";
    /// Fatigue endpoint answered but could not classify
    pub const FATIGUE_FAILED: &str = "Fatigue prediction failed.";
    /// Fatigue endpoint could not be reached
    pub const FATIGUE_ERROR: &str = "Fatigue prediction error.";
    /// Food photo has a non-image content type
    pub const INVALID_IMAGE_TYPE: &str = "Please select a valid image file";
    /// Food photo exceeds the size limit
    pub const IMAGE_TOO_LARGE: &str =
        "Image file is too large. Please select an image under 10MB";
    /// Food analysis failed without a reason from the backend
    pub const ANALYSIS_FAILED: &str = "Analysis failed";
    /// Prompts offered before the user types anything
    pub const QUICK_SUGGESTIONS: [&str; 6] = [
        "How's my progress this week?",
        "Suggest a quick workout",
        "What should I eat for lunch?",
        "I'm feeling unmotivated",
        "Plan my rest day",
        "Review my nutrition goals",
    ];
}
