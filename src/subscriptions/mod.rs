pub mod copilot;
