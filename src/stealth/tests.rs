//! Stealth script tests
//!
//! Verifies that every script override is derived from the source
//! fingerprint and that the launcher seam is callable through a mock.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::fingerprint::{Fingerprint, FingerprintGenerator};
    use crate::profile::ProxyConfig;
    use crate::Error;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[test]
    fn test_script_embeds_fingerprint_values() {
        let fp = FingerprintGenerator::with_seed(21).generate();
        let script = build_stealth_script(&fp).expect("script should render");

        assert!(script.contains(&fp.hardware_concurrency.to_string()));
        assert!(script.contains(&fp.device_memory.to_string()));
        assert!(script.contains(&fp.platform));
        assert!(script.contains(&fp.webgl_vendor));
        assert!(script.contains(&fp.webgl_renderer));
        assert!(script.contains(&fp.screen_resolution.width.to_string()));
        assert!(script.contains(&fp.screen_resolution.height.to_string()));
        assert!(script.contains("navigator, 'webdriver'"));
        assert!(!script.contains("__"), "all template tokens substituted");
    }

    #[test]
    fn test_canvas_noise_offset_is_deterministic() {
        let fp = FingerprintGenerator::with_seed(33).generate();

        let first = canvas_noise_offset(&fp.canvas_fingerprint);
        let second = canvas_noise_offset(&fp.canvas_fingerprint);

        assert_eq!(first, second);
        assert!(first < 10);
    }

    #[test]
    fn test_canvas_noise_offset_tolerates_malformed_hash() {
        assert_eq!(canvas_noise_offset(""), 0);
        assert_eq!(canvas_noise_offset("zz"), 0);
    }

    #[test]
    fn test_script_differs_between_fingerprints() {
        let generator = FingerprintGenerator::with_seed(5);
        let a = build_stealth_script(&generator.generate()).expect("script");
        let b = build_stealth_script(&generator.generate()).expect("script");

        assert_ne!(a, b);
    }

    /// Launcher mock recording what it was handed
    struct MockLauncher {
        launched: Mutex<Vec<(String, Fingerprint, Option<ProxyConfig>)>>,
    }

    #[async_trait]
    impl SessionLauncher for MockLauncher {
        async fn launch(
            &self,
            profile_id: &str,
            fingerprint: Fingerprint,
            proxy: Option<ProxyConfig>,
        ) -> Result<String, Error> {
            let session_id = format!("session-{}", profile_id);
            self.launched
                .lock()
                .await
                .push((profile_id.to_string(), fingerprint, proxy));
            Ok(session_id)
        }

        async fn close(&self, _session_id: &str) -> Result<(), Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_launcher_seam_receives_identity_by_value() {
        let launcher = Arc::new(MockLauncher {
            launched: Mutex::new(Vec::new()),
        });

        let fp = FingerprintGenerator::with_seed(8).generate();
        let session = launcher
            .launch("abc123def456", fp.clone(), None)
            .await
            .expect("launch");

        assert_eq!(session, "session-abc123def456");
        {
            let launched = launcher.launched.lock().await;
            assert_eq!(launched.len(), 1);
            assert_eq!(launched[0].1, fp);
        }
        launcher.close(&session).await.expect("close");
    }
}
