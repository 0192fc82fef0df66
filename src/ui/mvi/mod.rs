//! Model-View-Intent primitives shared by the navbar controllers.
//!
//! ```text
//! NavAction ──→ Intent ──→ Reducer ──→ State ──→ View tree
//!     ↑                                             │
//!     └─────────────────────────────────────────────┘
//! ```
//!
//! - **State**: plain data owned by exactly one controller
//! - **Intent**: a user interaction that may change that state
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Runs a reducer over a state field in place.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::ui::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}

pub(crate) use dispatch_mvi;
