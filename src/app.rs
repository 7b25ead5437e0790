use crate::audio::WebToneBackend;
use crate::core::{
    AppConfig, AudioStatus, MovementSimulator, PetFetcher, RequestTracker, ReverseGeocoder,
    SimulatedGeocoder, SoundType, ToneId, ToneSession,
};
use crate::map::MapView;
use crate::status;
use crate::timers::WindowInterval;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

pub type SharedApp = Rc<RefCell<App>>;

/// Everything mutable on the page lives here. Handlers borrow it for the
/// length of one callback; timer and audio callbacks only hold a `Weak`.
pub struct App {
    pub config: AppConfig,
    pub document: web::Document,
    pub map: Option<MapView>,
    pub tones: ToneSession<WebToneBackend>,
    pub movement: MovementSimulator<WindowInterval>,
    pub pets: PetFetcher,
    pub addresses: RequestTracker,
    pub geocoder: Box<dyn ReverseGeocoder>,
    rng: StdRng,
}

impl App {
    pub fn new_shared(document: web::Document, config: AppConfig, map: Option<MapView>) -> SharedApp {
        Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
            let on_ended = weak.clone();
            let backend = WebToneBackend::new(move |id| {
                if let Some(app) = on_ended.upgrade() {
                    app.borrow_mut().tone_finished(id);
                }
            });
            let movement = MovementSimulator::new(
                WindowInterval,
                config.default_coordinate,
                config.movement,
                StdRng::from_entropy(),
            );
            RefCell::new(App {
                config,
                document,
                map,
                tones: ToneSession::new(backend),
                movement,
                pets: PetFetcher::default(),
                addresses: RequestTracker::default(),
                geocoder: Box::new(SimulatedGeocoder::new(StdRng::from_entropy())),
                rng: StdRng::from_entropy(),
            })
        })
    }

    /// Play `sound`, preempting any tone in flight.
    pub fn play_sound(&mut self, sound: SoundType) {
        match self.tones.play_sound(sound) {
            Ok(_) => {
                status::report_audio(&self.document, AudioStatus::Playing);
                status::show_sound(&self.document, sound);
            }
            Err(e) => log::error!("[audio] could not play {:?}: {}", sound, e),
        }
    }

    pub fn play_random_sound(&mut self) {
        let sound = SoundType::random(&mut self.rng);
        self.play_sound(sound);
    }

    pub fn stop_all_sounds(&mut self) {
        let paused = self.tones.stop_all();
        status::report_audio(&self.document, paused);
    }

    /// Resume audio output after the first user gesture.
    pub fn wake_audio(&mut self) {
        self.tones.backend_mut().wake();
    }

    fn tone_finished(&mut self, id: ToneId) {
        if let Some(idle) = self.tones.finished(id) {
            status::report_audio(&self.document, idle);
        }
    }
}
