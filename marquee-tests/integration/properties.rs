//! Property tests for the ordering and idempotence guarantees.

use marquee_core::config::MarqueeConfig;
use marquee_core::service::PlayerService;
use marquee_core::session::PlaybackState;
use marquee_core::{Catalog, VideoId, VideoRecord};
use proptest::prelude::*;

/// Builds a service over `entries`, flagging where asked. Ids are
/// `video_{index}` so properties can map hits back to entries.
fn service_with(entries: &[(String, bool)]) -> PlayerService {
    let records = entries
        .iter()
        .enumerate()
        .map(|(index, (title, _))| VideoRecord {
            id: VideoId::from(format!("video_{index}")),
            title: title.clone(),
            tags: Vec::new(),
        })
        .collect();
    let catalog = Catalog::from_records(records).unwrap();
    let mut service = PlayerService::new(catalog, &MarqueeConfig::default());
    for (index, (_, flagged)) in entries.iter().enumerate() {
        if *flagged {
            service.flag(&format!("video_{index}"), None).unwrap();
        }
    }
    service
}

fn entry_index(id: &VideoId) -> usize {
    id.as_str().strip_prefix("video_").unwrap().parse().unwrap()
}

proptest! {
    #[test]
    fn search_results_are_sorted_and_available(
        entries in prop::collection::vec(("[a-zA-Z ]{0,12}", any::<bool>()), 0..10),
        term in "[a-zA-Z]{0,3}",
    ) {
        let service = service_with(&entries);
        let hits = service.search(&term);

        let keys: Vec<String> = hits.iter().map(|h| h.title.to_lowercase()).collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));

        let needle = term.to_lowercase();
        for hit in &hits {
            let (title, flagged) = &entries[entry_index(&hit.id)];
            prop_assert!(!flagged);
            prop_assert!(title.to_lowercase().contains(&needle));
        }
    }

    #[test]
    fn play_then_stop_always_lands_idle(
        entries in prop::collection::vec(("[a-zA-Z ]{0,12}", any::<bool>()), 1..10),
        pick in any::<prop::sample::Index>(),
        warmup in any::<prop::sample::Index>(),
    ) {
        let mut service = service_with(&entries);

        // Arbitrary prior state: maybe something is already playing.
        let warmup_id = format!("video_{}", warmup.index(entries.len()));
        let _ = service.play(&warmup_id);

        let id = format!("video_{}", pick.index(entries.len()));
        if service.play(&id).is_ok() {
            prop_assert!(service.stop().is_ok());
        } else {
            let _ = service.stop();
        }
        prop_assert_eq!(service.session().state(), &PlaybackState::Idle);
    }

    #[test]
    fn playlist_add_is_idempotent_on_membership(
        name in "[A-Za-z]{1,8}",
        extra_adds in 1usize..4,
    ) {
        let entries = vec![("Amazing Cats".to_string(), false)];
        let mut service = service_with(&entries);

        service.create_playlist(&name).unwrap();
        service.add_to_playlist(&name, "video_0").unwrap();
        for _ in 0..extra_adds {
            prop_assert!(service.add_to_playlist(&name, "video_0").is_err());
        }
        prop_assert_eq!(service.playlist_videos(&name).unwrap().len(), 1);
    }
}
