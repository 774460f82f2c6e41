pub mod feedback_delay;
