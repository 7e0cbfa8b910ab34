use std::time::{Duration, Instant};

/// Wall-clock stats for the running session, shown in the HUD.
///
/// The highscore is game state and lives in the engine; this only tracks
/// timing and how many games have been played since the process started.
pub struct SessionStats {
    pub start_time: Instant,
    pub elapsed: Duration,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self) {
        self.games_played += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        stats.elapsed = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_games_played_counting() {
        let mut stats = SessionStats::new();

        stats.on_game_over();
        stats.on_game_over();
        assert_eq!(stats.games_played, 2);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(50));
        stats.update();

        assert!(stats.elapsed.as_millis() >= 50);

        stats.on_game_start();
        stats.update();
        assert!(stats.elapsed.as_millis() < 50);
    }
}
