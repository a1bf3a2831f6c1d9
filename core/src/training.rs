// core/src/training.rs
use serde::Serialize;

use crate::errors::WorkoutError;
use crate::message::InfoMessage;
use crate::validation::{finite, non_negative, positive};

pub const M_IN_KM: f64 = 1000.0; // meter per km
pub const H_IN_MIN: f64 = 60.0;  // minutter per time
pub const LEN_STEP: f64 = 0.65;  // skrittlengde (m) for løp og gange

// --- Løp ---
pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 1.79;

// --- Sportsgange ---
pub const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
pub const KMH_IN_MS: f64 = 0.278;
pub const CM_IN_M: f64 = 100.0;

// --- Svømming ---
pub const SWM_LEN_STEP: f64 = 1.38; // armtak (m)
pub const SWM_SPEED_SHIFT: f64 = 1.1;
pub const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Felles grunndata for én gjennomført økt.
///
/// En ren `Session` har ingen kalorimodell; `calories_kcal` feiler med
/// `NotImplemented`. Bruk en av variantene (`Running`, `SportsWalking`,
/// `Swimming`) for full oppsummering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Session {
    action: u64,   // skritt / armtak
    duration: f64, // timer
    weight: f64,   // kg
}

impl Session {
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
        positive("duration", duration)?;
        non_negative("weight", weight)?;
        Ok(Self { action, duration, weight })
    }

    #[inline]
    pub fn action(&self) -> u64 {
        self.action
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Distanse i km for gitt skrittlengde.
    #[inline]
    pub fn distance_with_step(&self, len_step: f64) -> f64 {
        self.action as f64 * len_step / M_IN_KM
    }

    /// Distanse med standard skrittlengde (0.65 m).
    pub fn distance_km(&self) -> f64 {
        self.distance_with_step(LEN_STEP)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration
    }

    pub fn calories_kcal(&self) -> Result<f64, WorkoutError> {
        Err(WorkoutError::NotImplemented("Session::calories_kcal"))
    }
}

/// Felles beregningskontrakt for alle treningstyper.
///
/// `calories_kcal` har ingen default: hver variant må implementere sin egen
/// formel.
pub trait Training {
    /// Navn i oppsummeringen ("Running", "SportsWalking", "Swimming").
    const NAME: &'static str;
    const LEN_STEP: f64 = self::LEN_STEP;

    fn session(&self) -> &Session;

    fn distance_km(&self) -> f64 {
        self.session().distance_with_step(Self::LEN_STEP)
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration()
    }

    fn calories_kcal(&self) -> f64;

    fn summarize(&self) -> InfoMessage {
        InfoMessage::new(
            Self::NAME,
            self.session().duration(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.calories_kcal(),
        )
    }
}

/// Avviser økter der avledet fart eller kalorier blir inf/NaN
/// (f.eks. subnormal varighet eller enorm bassenglengde).
fn check_derived<T: Training>(training: T) -> Result<T, WorkoutError> {
    finite("mean_speed", training.mean_speed_kmh())?;
    finite("calories", training.calories_kcal())?;
    Ok(training)
}

/// Trening: løp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Running {
    session: Session,
}

impl Running {
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
        check_derived(Self { session: Session::new(action, duration, weight)? })
    }
}

impl Training for Running {
    const NAME: &'static str = "Running";

    fn session(&self) -> &Session {
        &self.session
    }

    fn calories_kcal(&self) -> f64 {
        let s = &self.session;
        (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() + RUN_SPEED_SHIFT)
            * s.weight / M_IN_KM
            * (s.duration * H_IN_MIN)
    }
}

/// Trening: sportsgange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SportsWalking {
    session: Session,
    height: f64, // cm
}

impl SportsWalking {
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Result<Self, WorkoutError> {
        let session = Session::new(action, duration, weight)?;
        // høyden står i nevneren
        positive("height", height)?;
        check_derived(Self { session, height })
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    const NAME: &'static str = "SportsWalking";

    fn session(&self) -> &Session {
        &self.session
    }

    fn calories_kcal(&self) -> f64 {
        let s = &self.session;
        (WLK_WEIGHT_MULTIPLIER * s.weight
            + ((self.mean_speed_kmh() * KMH_IN_MS).powi(2) / (self.height / CM_IN_M))
                * WLK_SPEED_HEIGHT_MULTIPLIER
                * s.weight)
            * (s.duration * H_IN_MIN)
    }
}

/// Trening: svømming.
///
/// Snittfarten beregnes fra bassenglengde og antall lengder, ikke fra
/// armtak. Distansen bruker fortsatt armtak * 1.38 m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swimming {
    session: Session,
    length_pool: f64, // meter
    count_pool: u64,
}

impl Swimming {
    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u64,
    ) -> Result<Self, WorkoutError> {
        let session = Session::new(action, duration, weight)?;
        non_negative("length_pool", length_pool)?;
        check_derived(Self { session, length_pool, count_pool })
    }

    #[inline]
    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    #[inline]
    pub fn count_pool(&self) -> u64 {
        self.count_pool
    }
}

impl Training for Swimming {
    const NAME: &'static str = "Swimming";
    const LEN_STEP: f64 = SWM_LEN_STEP;

    fn session(&self) -> &Session {
        &self.session
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.session.duration
    }

    fn calories_kcal(&self) -> f64 {
        let s = &self.session;
        (self.mean_speed_kmh() + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * s.weight * s.duration
    }
}

/// Én økt av vilkårlig type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "training_type")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! each_variant {
    ($w:expr, $t:ident => $body:expr) => {
        match $w {
            Workout::Running($t) => $body,
            Workout::SportsWalking($t) => $body,
            Workout::Swimming($t) => $body,
        }
    };
}

impl Workout {
    pub fn training_type(&self) -> &'static str {
        match self {
            Workout::Running(_) => Running::NAME,
            Workout::SportsWalking(_) => SportsWalking::NAME,
            Workout::Swimming(_) => Swimming::NAME,
        }
    }

    pub fn session(&self) -> &Session {
        each_variant!(self, t => t.session())
    }

    pub fn distance_km(&self) -> f64 {
        each_variant!(self, t => t.distance_km())
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        each_variant!(self, t => t.mean_speed_kmh())
    }

    pub fn calories_kcal(&self) -> f64 {
        each_variant!(self, t => t.calories_kcal())
    }

    pub fn summarize(&self) -> InfoMessage {
        each_variant!(self, t => t.summarize())
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::SportsWalking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}
