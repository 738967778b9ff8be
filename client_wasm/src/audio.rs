//! Sound effects backed by `<audio>` elements in the page

use game_core::Events;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::renderer::init::document;

pub const HIT_SOUND_ID: &str = "hitSound";
pub const WALL_SOUND_ID: &str = "wallSound";
pub const SCORE_SOUND_ID: &str = "scoreSound";

const VOLUME: f64 = 0.28;

/// Effects for the three gameplay events; any of them may be absent
pub struct Sounds {
    hit: Option<HtmlAudioElement>,
    wall: Option<HtmlAudioElement>,
    score: Option<HtmlAudioElement>,
}

impl Sounds {
    pub fn load() -> Self {
        Self {
            hit: lookup(HIT_SOUND_ID),
            wall: lookup(WALL_SOUND_ID),
            score: lookup(SCORE_SOUND_ID),
        }
    }

    pub fn play_events(&self, events: &Events) {
        if events.ball_hit_paddle {
            play(self.hit.as_ref());
        }
        if events.ball_hit_wall {
            play(self.wall.as_ref());
        }
        if events.scored.is_some() {
            play(self.score.as_ref());
        }
    }
}

fn lookup(id: &str) -> Option<HtmlAudioElement> {
    let element = document().ok()?.get_element_by_id(id);
    let Some(element) = element else {
        log::warn!("audio element #{} not found, sound disabled", id);
        return None;
    };
    match element.dyn_into::<HtmlAudioElement>() {
        Ok(audio) => {
            audio.set_volume(VOLUME);
            Some(audio)
        }
        Err(_) => {
            log::warn!("#{} is not an <audio> element", id);
            None
        }
    }
}

/// Rewind and play; blocked autoplay is logged and otherwise ignored
fn play(audio: Option<&HtmlAudioElement>) {
    let Some(audio) = audio else {
        return;
    };
    audio.set_current_time(0.0);
    match audio.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("sound playback rejected: {:?}", err);
            }
        }),
        Err(err) => log::debug!("sound playback failed: {:?}", err),
    }
}
