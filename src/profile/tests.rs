//! Profile record conversion tests
//!
//! Covers the round-trip law, missing-optional defaults and patch semantics.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::fingerprint::FingerprintGenerator;
    use serde_json::json;

    fn sample_profile() -> Profile {
        let generator = FingerprintGenerator::with_seed(99);
        let mut profile = Profile::new(
            "abc123def456".to_string(),
            "Alice".to_string(),
            generator.generate(),
            Some(ProxyConfig {
                host: "p.example.com".to_string(),
                port: 8080,
                username: "u".to_string(),
                password: "pw".to_string(),
            }),
        );
        profile.cookies.push(json!({"name": "sid", "value": "xyz"}));
        profile
            .local_storage
            .insert("theme".to_string(), "dark".to_string());
        profile.notes = "test account".to_string();
        profile
    }

    #[test]
    fn test_record_round_trip() {
        let profile = sample_profile();

        let record = profile.to_record().expect("encode should succeed");
        let restored = Profile::from_record(record).expect("decode should succeed");

        assert_eq!(restored, profile);
    }

    #[test]
    fn test_from_record_fills_missing_optionals() {
        let generator = FingerprintGenerator::with_seed(5);
        let fingerprint =
            serde_json::to_value(generator.generate()).expect("fingerprint should encode");

        let record = json!({
            "profile_id": "zz9plural0al",
            "name": "Bob",
            "fingerprint": fingerprint,
        });

        let profile = Profile::from_record(record).expect("decode should tolerate omissions");

        assert!(profile.proxy.is_none());
        assert!(profile.cookies.is_empty());
        assert!(profile.local_storage.is_empty());
        assert!(profile.session_storage.is_empty());
        assert!(profile.last_used.is_none());
        assert_eq!(profile.notes, "");
        assert!(profile.created_at > 0);
    }

    #[test]
    fn test_from_record_rejects_missing_identity() {
        let record = json!({ "name": "orphan" });
        assert!(Profile::from_record(record).is_err());
    }

    #[test]
    fn test_patch_updates_only_named_fields() {
        let mut profile = sample_profile();
        let original_id = profile.profile_id.clone();
        let original_created = profile.created_at;

        profile.apply_patch(ProfilePatch {
            name: Some("Renamed".to_string()),
            notes: Some("rotated".to_string()),
            ..Default::default()
        });

        assert_eq!(profile.name, "Renamed");
        assert_eq!(profile.notes, "rotated");
        assert_eq!(profile.profile_id, original_id);
        assert_eq!(profile.created_at, original_created);
        assert!(profile.proxy.is_some());
    }

    #[test]
    fn test_patch_can_clear_proxy_and_last_used() {
        let mut profile = sample_profile();
        profile.last_used = Some(1_700_000_000);

        profile.apply_patch(ProfilePatch {
            proxy: Some(None),
            last_used: Some(None),
            ..Default::default()
        });

        assert!(profile.proxy.is_none());
        assert!(profile.last_used.is_none());
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let profile = sample_profile();
        let mut patched = profile.clone();

        patched.apply_patch(ProfilePatch::default());

        assert_eq!(patched, profile);
    }
}
