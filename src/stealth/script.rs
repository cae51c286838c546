//! Stealth script builder
//!
//! Renders the init script a launcher injects before page load. Every
//! override is derived from fingerprint fields already present on the
//! profile; the builder adds nothing of its own.

use crate::fingerprint::Fingerprint;
use crate::Result;

/// Stealth override template
///
/// Tokens are substituted with JSON-encoded fingerprint values before
/// injection via `Page.addScriptToEvaluateOnNewDocument` or equivalent.
const STEALTH_TEMPLATE: &str = r#"
// Remove webdriver indicators
Object.defineProperty(navigator, 'webdriver', {
    get: () => undefined
});

// Plugins
Object.defineProperty(navigator, 'plugins', {
    get: () => __PLUGINS__
});

// Hardware concurrency
Object.defineProperty(navigator, 'hardwareConcurrency', {
    get: () => __HARDWARE_CONCURRENCY__
});

// Device memory
Object.defineProperty(navigator, 'deviceMemory', {
    get: () => __DEVICE_MEMORY__
});

// Platform
Object.defineProperty(navigator, 'platform', {
    get: () => __PLATFORM__
});

// Languages
Object.defineProperty(navigator, 'languages', {
    get: () => __LANGUAGES__
});

// WebGL vendor/renderer
const getParameter = WebGLRenderingContext.prototype.getParameter;
WebGLRenderingContext.prototype.getParameter = function(parameter) {
    if (parameter === 37445) {
        return __WEBGL_VENDOR__;
    }
    if (parameter === 37446) {
        return __WEBGL_RENDERER__;
    }
    return getParameter.call(this, parameter);
};

// Canvas pixel noise seeded from the profile's canvas hash
const originalToDataURL = HTMLCanvasElement.prototype.toDataURL;
HTMLCanvasElement.prototype.toDataURL = function() {
    const context = this.getContext('2d');
    const imageData = context.getImageData(0, 0, this.width, this.height);
    for (let i = 0; i < imageData.data.length; i += 4) {
        imageData.data[i] = imageData.data[i] ^ __CANVAS_NOISE__;
    }
    context.putImageData(imageData, 0, 0);
    return originalToDataURL.apply(this, arguments);
};

// Screen geometry
Object.defineProperty(screen, 'width', {
    get: () => __SCREEN_WIDTH__
});
Object.defineProperty(screen, 'height', {
    get: () => __SCREEN_HEIGHT__
});
Object.defineProperty(screen, 'availWidth', {
    get: () => __SCREEN_WIDTH__
});
Object.defineProperty(screen, 'availHeight', {
    get: () => __SCREEN_AVAIL_HEIGHT__
});
Object.defineProperty(screen, 'colorDepth', {
    get: () => __COLOR_DEPTH__
});

// Permissions shim
const originalQuery = window.navigator.permissions.query;
window.navigator.permissions.query = (parameters) => (
    parameters.name === 'notifications' ?
        Promise.resolve({ state: Notification.permission }) :
        originalQuery(parameters)
);

// Chrome runtime stub
window.chrome = {
    runtime: {}
};
"#;

/// Height reserved for the OS taskbar in availHeight
const TASKBAR_HEIGHT: u32 = 40;

/// Deterministic 0-9 pixel-noise offset derived from a canvas hash
///
/// Same hash, same offset across restarts; a malformed hash maps to 0.
pub fn canvas_noise_offset(canvas_fingerprint: &str) -> u8 {
    canvas_fingerprint
        .get(..2)
        .and_then(|prefix| u8::from_str_radix(prefix, 16).ok())
        .map(|byte| byte % 10)
        .unwrap_or(0)
}

/// Build the stealth init script for a fingerprint
pub fn build_stealth_script(fingerprint: &Fingerprint) -> Result<String> {
    let plugins = serde_json::to_string(&fingerprint.plugins)?;
    let languages = serde_json::to_string(&fingerprint.language_list())?;
    let platform = serde_json::to_string(&fingerprint.platform)?;
    let webgl_vendor = serde_json::to_string(&fingerprint.webgl_vendor)?;
    let webgl_renderer = serde_json::to_string(&fingerprint.webgl_renderer)?;

    let screen = &fingerprint.screen_resolution;
    let avail_height = screen.height.saturating_sub(TASKBAR_HEIGHT);

    Ok(STEALTH_TEMPLATE
        .replace("__PLUGINS__", &plugins)
        .replace(
            "__HARDWARE_CONCURRENCY__",
            &fingerprint.hardware_concurrency.to_string(),
        )
        .replace("__DEVICE_MEMORY__", &fingerprint.device_memory.to_string())
        .replace("__PLATFORM__", &platform)
        .replace("__LANGUAGES__", &languages)
        .replace("__WEBGL_VENDOR__", &webgl_vendor)
        .replace("__WEBGL_RENDERER__", &webgl_renderer)
        .replace(
            "__CANVAS_NOISE__",
            &canvas_noise_offset(&fingerprint.canvas_fingerprint).to_string(),
        )
        .replace("__SCREEN_WIDTH__", &screen.width.to_string())
        .replace("__SCREEN_HEIGHT__", &screen.height.to_string())
        .replace("__SCREEN_AVAIL_HEIGHT__", &avail_height.to_string())
        .replace("__COLOR_DEPTH__", &screen.color_depth.to_string()))
}
