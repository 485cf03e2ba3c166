//! Hit sound and background song. Playback is fire-and-forget: a blocked or
//! failed play is logged and otherwise ignored.

use log::warn;
use web_sys::HtmlAudioElement;

pub struct Soundboard {
    hit: Option<HtmlAudioElement>,
    song: Option<HtmlAudioElement>,
}

impl Soundboard {
    pub fn new(hit_url: Option<&str>, song_url: Option<&str>) -> Self {
        Self {
            hit: hit_url.and_then(load),
            song: song_url.and_then(load),
        }
    }

    pub fn play_hit(&self) {
        if let Some(hit) = &self.hit {
            hit.set_current_time(0.0);
            if let Err(e) = hit.play() {
                warn!("hit sound failed: {e:?}");
            }
        }
    }

    pub fn loop_song(&self) {
        if let Some(song) = &self.song {
            song.set_loop(true);
            if let Err(e) = song.play() {
                warn!("song failed: {e:?}");
            }
        }
    }

    pub fn stop_song(&self) {
        if let Some(song) = &self.song {
            if let Err(e) = song.pause() {
                warn!("song pause failed: {e:?}");
            }
            song.set_current_time(0.0);
        }
    }
}

fn load(url: &str) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(url) {
        Ok(el) => Some(el),
        Err(e) => {
            warn!("could not load audio {url}: {e:?}");
            None
        }
    }
}
