//! Session: everything that happens between one user intent and the next frame
//!
//! A [`Session`] owns the [`Abacus`], the queue of pending carries, the lesson
//! and the player's preferences, and talks to the outside world only through
//! the collaborator traits in [`crate::devices`]. The UI forwards intents in
//! and reads a [`Snapshot`] plus a couple of text lines back out.
//!
//! Time is always passed in. The UI hands over `Instant::now()`; tests hand
//! over instants of their choosing, which keeps carry timing deterministic.

use crate::config::Settings;
use crate::devices::identity::USER_KEY;
use crate::devices::{IdentityStore, SpeechOutput, ToneOutput};
use crate::engine::constants::BEADS_PER_ROD;
use crate::engine::{Abacus, CarryOutcome, CarryTimer, Column, ColumnChange, Rejection};
use crate::lesson::{CheckOutcome, Lesson, LessonState};
use crate::presentation::layout::{count_for_bead_click, count_from_pointer, hit_test};
use crate::presentation::{feedback_text, PointerTarget, Verbosity};
use crate::snapshot::Snapshot;
use rand::rngs::SmallRng;
use std::time::Instant;
use tracing::{debug, info, warn};

pub const GREETING: &str = "Hello! Who is playing today?";
pub const PLAYER_PROMPT: &str = "Who is playing today?";
pub const VOICE_ENABLED: &str = "Voice enabled. I am your English teacher.";
pub const CLEARED: &str = "Abacus cleared.";

/// The outside world, as seen by a session
pub struct Collaborators {
    pub identity: Box<dyn IdentityStore>,
    pub speech: Box<dyn SpeechOutput>,
    pub tone: Box<dyn ToneOutput>,
}

pub struct Session {
    abacus: Abacus,
    carries: CarryTimer,
    lesson: Lesson,

    user: Option<String>,
    voice: bool,
    sound: bool,
    verbosity: Verbosity,

    /// Sentence describing the last bead move
    feedback: Option<String>,
    /// Last thing the teacher said (lesson lines, carries, greetings)
    narration: Option<String>,

    identity: Box<dyn IdentityStore>,
    speech: Box<dyn SpeechOutput>,
    tone: Box<dyn ToneOutput>,
    rng: SmallRng,
}

impl Session {
    /// Build a session and pick up the remembered player, if any.
    pub fn new(settings: &Settings, collaborators: Collaborators, rng: SmallRng) -> Self {
        let Collaborators {
            identity,
            speech,
            tone,
        } = collaborators;
        let user = identity.get(USER_KEY);
        if let Some(name) = &user {
            info!(user = %name, "welcome back");
        }

        Session {
            abacus: Abacus::with_carry_delay(settings.carry_delay),
            carries: CarryTimer::new(),
            lesson: Lesson::new(),
            user,
            voice: settings.voice,
            sound: settings.sound,
            verbosity: settings.verbosity,
            feedback: None,
            narration: None,
            identity,
            speech,
            tone,
            rng,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.abacus, self.lesson.state())
    }

    pub fn abacus(&self) -> &Abacus {
        &self.abacus
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn narration(&self) -> Option<&str> {
        self.narration.as_deref()
    }

    pub fn lesson_state(&self) -> LessonState {
        self.lesson.state()
    }

    pub fn voice(&self) -> bool {
        self.voice
    }

    pub fn sound(&self) -> bool {
        self.sound
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// When the next pending carry wants to fire
    pub fn next_carry_due(&self) -> Option<Instant> {
        self.carries.next_due()
    }

    // ---- players -------------------------------------------------------

    /// Say hello on the player picker
    pub fn greet(&mut self) {
        self.say(GREETING, true);
    }

    pub fn repeat_player_prompt(&mut self) {
        self.say(PLAYER_PROMPT, true);
    }

    pub fn choose_user(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Err(err) = self.identity.set(USER_KEY, name) {
            warn!(error = %err, "could not remember player");
        }
        info!(user = %name, "player chosen");
        self.user = Some(name.to_string());
    }

    pub fn change_user(&mut self) {
        if let Err(err) = self.identity.remove(USER_KEY) {
            warn!(error = %err, "could not forget player");
        }
        debug!(previous = ?self.user, "player cleared");
        self.user = None;
    }

    // ---- beads ---------------------------------------------------------

    /// Move a rod to `target` counted beads.
    ///
    /// Rejections are returned for inspection but have no side effects: no
    /// tone, no feedback, no state change.
    pub fn set_column(
        &mut self,
        column: usize,
        target: u8,
        now: Instant,
    ) -> Result<ColumnChange, Rejection> {
        let change = match self.abacus.set_column(column, target, now) {
            Ok(change) => change,
            Err(rejection) => {
                debug!(%rejection, "bead move ignored");
                return Err(rejection);
            }
        };

        self.click(change.column);
        if let Some(carry) = change.carry {
            self.carries.schedule(carry);
        }

        let text = feedback_text(
            change.column,
            self.abacus.counts(),
            self.verbosity,
            self.user.as_deref(),
            &mut self.rng,
        );
        if self.voice {
            self.speech.speak(&text);
        }
        self.feedback = Some(text);
        Ok(change)
    }

    /// Press on a rod at canvas position `x`
    pub fn press_rod(
        &mut self,
        column: Column,
        x: f64,
        now: Instant,
    ) -> Result<ColumnChange, Rejection> {
        self.set_column(column.index(), count_from_pointer(x), now)
    }

    /// Click a single bead. Bead indices run from 0 to 9.
    pub fn press_bead(
        &mut self,
        column: Column,
        bead: u8,
        now: Instant,
    ) -> Result<ColumnChange, Rejection> {
        if bead >= BEADS_PER_ROD {
            let rejection = Rejection::InvalidInput {
                column: column.index(),
                count: bead,
            };
            debug!(%rejection, bead, "bead click ignored");
            return Err(rejection);
        }
        let target = count_for_bead_click(bead, self.abacus.count(column));
        self.set_column(column.index(), target, now)
    }

    /// Press anywhere on the canvas. `None` when nothing was hit.
    pub fn press_at(
        &mut self,
        x: f64,
        y: f64,
        now: Instant,
    ) -> Option<Result<ColumnChange, Rejection>> {
        let result = match hit_test(x, y, self.abacus.counts())? {
            PointerTarget::Bead { column, bead } => self.press_bead(column, bead, now),
            PointerTarget::Rod { column, x } => self.press_rod(column, x, now),
        };
        Some(result)
    }

    /// Slide one bead on or off the counting side
    pub fn nudge(
        &mut self,
        column: Column,
        delta: i8,
        now: Instant,
    ) -> Result<ColumnChange, Rejection> {
        let target = (self.abacus.count(column) as i16 + delta as i16)
            .clamp(0, BEADS_PER_ROD as i16) as u8;
        self.set_column(column.index(), target, now)
    }

    /// Fire every carry that is due. Returns how many moved beads.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        while let Some(task) = self.carries.pop_due(now) {
            match self.abacus.apply_carry(task, now) {
                CarryOutcome::Applied { from, to, next } => {
                    applied += 1;
                    self.click(to);
                    let line = format!(
                        "Ten {} carry to the {} rod!",
                        from.name().to_lowercase(),
                        to.name().to_lowercase()
                    );
                    self.say(&line, false);
                    if let Some(next) = next {
                        self.carries.schedule(next);
                    }
                }
                CarryOutcome::Stale => {}
            }
        }
        applied
    }

    /// Clear the abacus and end any lesson. Always allowed, even mid-carry.
    pub fn reset(&mut self) {
        self.abacus.reset();
        self.lesson.quit();
        self.click(Column::Ones);
        self.say(CLEARED, false);
        info!("abacus reset");
    }

    // ---- lesson --------------------------------------------------------

    pub fn start_lesson(&mut self) {
        self.reset();
        let intro = self.lesson.start();
        self.say(intro, true);
    }

    pub fn quit_lesson(&mut self) {
        self.lesson.quit();
    }

    pub fn check_lesson(&mut self) -> CheckOutcome {
        let outcome = self.lesson.check(self.abacus.counts());
        if let Some(message) = outcome.message() {
            self.say(message, true);
        }
        if matches!(outcome, CheckOutcome::Finished { .. }) {
            info!("lesson complete");
        }
        outcome
    }

    // ---- preferences ---------------------------------------------------

    pub fn toggle_voice(&mut self) -> bool {
        self.voice = !self.voice;
        if self.voice {
            self.say(VOICE_ENABLED, true);
        }
        debug!(voice = self.voice, "voice toggled");
        self.voice
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound = !self.sound;
        debug!(sound = self.sound, "sound toggled");
        self.sound
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    pub fn cycle_verbosity(&mut self) -> Verbosity {
        self.verbosity = self.verbosity.next();
        self.verbosity
    }

    // ---- helpers -------------------------------------------------------

    fn click(&mut self, column: Column) {
        if self.sound {
            self.tone.play_tone(column);
        }
    }

    /// Record a teacher line; speak it when voice is on or `always` is set.
    fn say(&mut self, text: &str, always: bool) {
        if always || self.voice {
            self.speech.speak(text);
        }
        self.narration = Some(text.to_string());
    }
}
