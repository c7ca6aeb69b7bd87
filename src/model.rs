//! Domain types shared across the engine.
//!
//! All inputs are owned by the caller and treated as immutable; the engine
//! clones participants into the output teams and never mutates its input.

/// Participant identity. Assigned by the surrounding product; opaque here.
pub type ParticipantId = u64;

/// Playing role, in presentation-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// Presentation priority within a team roster (goalkeepers first).
    pub fn priority(self) -> u8 {
        match self {
            Position::Goalkeeper => 0,
            Position::Defender => 1,
            Position::Midfielder => 2,
            Position::Forward => 3,
        }
    }
}

/// A member of the draw pool.
///
/// `rating` is the subjective value assigned by peers/admins; it is never
/// computed. `ranking_points` come from competitive results elsewhere.
/// Bots are synthetic fillers used to pad uneven pools — they contribute
/// zero to every coefficient computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub position: Position,
    /// Lifetime match count.
    pub matches: u32,
    /// Lifetime win count.
    pub wins: u32,
    /// Subjective rating, peer/admin assigned.
    pub rating: f64,
    /// Ranking points derived from competitive results.
    pub ranking_points: f64,
    pub is_bot: bool,
}

impl Participant {
    /// Creates a participant with zeroed attributes.
    ///
    /// The `with_*` builders keep fixtures terse:
    ///
    /// ```
    /// use team_draft::model::{Participant, Position};
    ///
    /// let p = Participant::new(7, Position::Forward)
    ///     .with_rating(8.5)
    ///     .with_record(20, 12);
    /// assert_eq!(p.wins, 12);
    /// ```
    pub fn new(id: ParticipantId, position: Position) -> Self {
        Self {
            id,
            name: String::new(),
            position,
            matches: 0,
            wins: 0,
            rating: 0.0,
            ranking_points: 0.0,
            is_bot: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the subjective rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the ranking points.
    pub fn with_ranking_points(mut self, points: f64) -> Self {
        self.ranking_points = points;
        self
    }

    /// Sets lifetime matches and wins.
    pub fn with_record(mut self, matches: u32, wins: u32) -> Self {
        self.matches = matches;
        self.wins = wins;
        self
    }

    /// Marks the participant as a synthetic filler.
    pub fn as_bot(mut self) -> Self {
        self.is_bot = true;
        self
    }
}

/// Season-level context that parametrizes the weighting policy.
///
/// Not persisted by the engine; supplied fresh per draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawContext {
    /// Total matches played across the relevant scope.
    pub total_matches: u32,
    /// Draws already published this season.
    pub published_draws: u32,
}

impl DrawContext {
    pub fn new(total_matches: u32, published_draws: u32) -> Self {
        Self {
            total_matches,
            published_draws,
        }
    }
}

/// A past draw, as recorded by the surrounding product.
///
/// The slice handed to the engine is ordered most-recent-first; the slice
/// index is the recency index used for decay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoricalDraw {
    /// One id list per team produced in that draw.
    pub teams: Vec<Vec<ParticipantId>>,
}

impl HistoricalDraw {
    pub fn new(teams: Vec<Vec<ParticipantId>>) -> Self {
        Self { teams }
    }
}

/// A drafted team.
///
/// Created empty by the runner, filled by the assigner, and finalized by
/// [`stats::recompute`](crate::stats::recompute), which also establishes
/// the position-based presentation order of `members`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub label: String,
    pub members: Vec<Participant>,
    /// Sum of member coefficients under the draw's context.
    pub coefficient_total: f64,
    /// Mean ranking points over non-bot members.
    pub mean_rank_score: f64,
    /// Mean subjective rating over non-bot members.
    pub mean_rating: f64,
}

impl Team {
    /// Creates an empty team with the given label.
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            members: Vec::new(),
            coefficient_total: 0.0,
            mean_rank_score: 0.0,
            mean_rating: 0.0,
        }
    }
}
