mod review_state;

pub use review_state::GhReviewState;
