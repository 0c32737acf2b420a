//! Property tests for the fallback state machine

use fallback_image::{DisplayImageRequest, DisplayOptions, FallbackImage, LoadEvent};
use proptest::prelude::*;

fn uri() -> impl Strategy<Value = String> {
    "https://[a-z]{1,12}\\.example/[a-z0-9_/]{0,24}\\.(png|jpg|webp)"
}

fn events() -> impl Strategy<Value = Vec<LoadEvent>> {
    prop::collection::vec(
        prop_oneof![Just(LoadEvent::Loaded), Just(LoadEvent::Failed)],
        0..16,
    )
}

proptest! {
    #[test]
    fn fallback_is_adopted_once_and_never_reverts(
        primary in uri(),
        fallback in uri(),
        sequence in events(),
    ) {
        let mut image = FallbackImage::new(
            DisplayImageRequest::new(primary.clone(), "alt").with_fallback(fallback.clone()),
        );

        let first_failure = sequence.iter().position(|e| *e == LoadEvent::Failed);
        let mut swaps = 0;

        for (i, event) in sequence.iter().enumerate() {
            if let Some(next) = image.handle(*event) {
                swaps += 1;
                prop_assert_eq!(next, fallback.as_str());
                prop_assert_eq!(Some(i), first_failure);
            }

            let expected = match first_failure {
                Some(at) if i >= at => fallback.as_str(),
                _ => primary.as_str(),
            };
            prop_assert_eq!(image.current_src(), expected);
        }

        prop_assert_eq!(swaps, usize::from(first_failure.is_some()));
        prop_assert_eq!(image.state().has_errored, first_failure.is_some());
    }

    #[test]
    fn loading_clears_exactly_once(sequence in events()) {
        let mut image = FallbackImage::new(DisplayImageRequest::new("/a.png", "a"));
        let mut transitions = 0;
        let mut was_loading = image.state().is_loading;
        prop_assert!(was_loading);

        for event in &sequence {
            image.handle(*event);
            let loading = image.state().is_loading;
            prop_assert!(!(loading && !was_loading), "is_loading was set again");
            if was_loading && !loading {
                transitions += 1;
            }
            was_loading = loading;
        }

        prop_assert_eq!(transitions, usize::from(!sequence.is_empty()));
        prop_assert_eq!(image.render().show_placeholder, sequence.is_empty());
    }

    #[test]
    fn passthrough_options_reach_the_element_unchanged(
        pairs in prop::collection::btree_map("data-[a-z]{1,8}", "[ -~]{0,16}", 0..6),
    ) {
        let options: DisplayOptions = pairs.clone().into_iter().collect();
        let mut image = FallbackImage::new(
            DisplayImageRequest::new("/a.png", "a").with_options(options),
        );
        image.handle(LoadEvent::Failed);

        let rendered = image.render();
        let forwarded: Vec<(String, String)> = rendered
            .forwarded_attributes()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let expected: Vec<(String, String)> = pairs.into_iter().collect();
        prop_assert_eq!(forwarded, expected);
    }
}

#[test]
fn passthrough_sizing_and_styling_in_html() {
    let options = DisplayOptions::new()
        .with("width", "1200")
        .with("height", "630")
        .with("style", "object-fit: cover")
        .with("loading", "lazy");

    let image = FallbackImage::new(
        DisplayImageRequest::new("https://cdn.example/og.jpg", "Cover").with_options(options),
    );
    let html = image.render().to_html();

    assert!(html.contains(r#"width="1200""#));
    assert!(html.contains(r#"height="630""#));
    assert!(html.contains(r#"style="object-fit: cover""#));
    assert!(html.contains(r#"loading="lazy""#));
    assert!(html.contains("animate-pulse"));
}

#[test]
fn on_error_cannot_be_supplied_by_caller() {
    let options: DisplayOptions = [("onError", "steal()"), ("class", "hero")]
        .into_iter()
        .collect();
    let image = FallbackImage::new(DisplayImageRequest::new("/a.png", "a").with_options(options));

    let html = image.render().to_html();
    assert!(!html.to_lowercase().contains("onerror"));
    assert!(html.contains(r#"class="hero""#));
}
