//! Absorptive health pool (AHP) stat
//!
//! A player can hold several AHP processes at once. Each one absorbs a
//! fraction of incoming damage (its efficacy) until its pool is empty, holds
//! its value for `sustain_time` seconds, and then decays at `decay_rate` per
//! second. A negative decay rate regenerates toward `limit` instead.

use serde::{Deserialize, Serialize};

use crate::core::config::ConfiguredShield;
use crate::core::types::KillCode;

const EPSILON: f32 = 0.0001;

/// One running AHP process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpProcess {
    pub kill_code: KillCode,
    pub current_amount: f32,
    pub limit: f32,
    pub decay_rate: f32,
    pub efficacy: f32,
    pub sustain_time: f32,
    pub persistent: bool,
}

impl AhpProcess {
    fn tick(&mut self, dt: f32) {
        let mut dt = dt;
        if self.sustain_time > 0.0 {
            let held = self.sustain_time.min(dt);
            self.sustain_time -= held;
            dt -= held;
        }
        if dt <= 0.0 {
            return;
        }
        self.current_amount = (self.current_amount - self.decay_rate * dt).clamp(0.0, self.limit);
    }

    fn is_spent(&self) -> bool {
        !self.persistent && self.current_amount <= EPSILON
    }
}

/// AHP stat module for one player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AhpStat {
    processes: Vec<AhpProcess>,
    next_kill_code: u32,
}

impl AhpStat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new process from shield parameters
    pub fn server_add_process(&mut self, shield: &ConfiguredShield) -> KillCode {
        self.next_kill_code += 1;
        let kill_code = KillCode(self.next_kill_code);
        self.processes.push(AhpProcess {
            kill_code,
            current_amount: shield.amount.min(shield.limit).max(0.0),
            limit: shield.limit,
            decay_rate: shield.decay,
            efficacy: shield.efficacy,
            sustain_time: shield.sustain,
            persistent: shield.persistent,
        });
        kill_code
    }

    /// Stop a process. Returns false if it was already gone.
    pub fn server_kill_process(&mut self, kill_code: KillCode) -> bool {
        let before = self.processes.len();
        self.processes.retain(|p| p.kill_code != kill_code);
        self.processes.len() != before
    }

    pub fn process(&self, kill_code: KillCode) -> Option<&AhpProcess> {
        self.processes.iter().find(|p| p.kill_code == kill_code)
    }

    pub fn process_mut(&mut self, kill_code: KillCode) -> Option<&mut AhpProcess> {
        self.processes.iter_mut().find(|p| p.kill_code == kill_code)
    }

    pub fn processes(&self) -> &[AhpProcess] {
        &self.processes
    }

    /// Overwrite a process's sustain time. Returns false if it is gone.
    pub fn set_sustain(&mut self, kill_code: KillCode, sustain: f32) -> bool {
        match self.process_mut(kill_code) {
            Some(process) => {
                process.sustain_time = sustain.max(0.0);
                true
            }
            None => false,
        }
    }

    /// Total pool across all processes
    pub fn current_value(&self) -> f32 {
        self.processes.iter().map(|p| p.current_amount).sum()
    }

    /// Advance every process by `dt` seconds and drop spent ones
    pub fn tick(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        for process in &mut self.processes {
            process.tick(dt);
        }
        self.processes.retain(|p| !p.is_spent());
    }

    /// Run damage through the pools in creation order
    ///
    /// Returns the damage left for health.
    pub fn absorb(&mut self, damage: f32) -> f32 {
        let mut remaining = damage.max(0.0);
        for process in &mut self.processes {
            if remaining <= 0.0 {
                break;
            }
            if process.current_amount <= 0.0 || process.efficacy <= 0.0 {
                continue;
            }
            let absorbed = (remaining * process.efficacy).min(process.current_amount);
            process.current_amount -= absorbed;
            remaining -= absorbed;
        }
        self.processes.retain(|p| !p.is_spent());
        remaining
    }

    pub fn clear(&mut self) {
        self.processes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shield(amount: f32, sustain: f32, decay: f32, persistent: bool) -> ConfiguredShield {
        ConfiguredShield {
            amount,
            limit: amount,
            decay,
            efficacy: 0.5,
            sustain,
            persistent,
        }
    }

    #[test]
    fn test_add_and_kill() {
        let mut ahp = AhpStat::new();
        let a = ahp.server_add_process(&shield(10.0, 0.0, 0.0, true));
        let b = ahp.server_add_process(&shield(5.0, 0.0, 0.0, true));
        assert_ne!(a, b);
        assert_eq!(ahp.current_value(), 15.0);

        assert!(ahp.server_kill_process(a));
        assert!(!ahp.server_kill_process(a));
        assert_eq!(ahp.current_value(), 5.0);
    }

    #[test]
    fn test_efficacy_splits_damage() {
        let mut ahp = AhpStat::new();
        ahp.server_add_process(&shield(20.0, 0.0, 0.0, true));
        // Half of 10 absorbed, half passes through
        assert_eq!(ahp.absorb(10.0), 5.0);
        assert_eq!(ahp.current_value(), 15.0);
    }

    #[test]
    fn test_pool_exhaustion() {
        let mut ahp = AhpStat::new();
        ahp.server_add_process(&shield(4.0, 0.0, 0.0, false));
        assert_eq!(ahp.absorb(20.0), 16.0);
        // Non-persistent process is removed once empty
        assert!(ahp.processes().is_empty());
    }

    #[test]
    fn test_persistent_survives_empty() {
        let mut ahp = AhpStat::new();
        let code = ahp.server_add_process(&shield(4.0, 0.0, 0.0, true));
        ahp.absorb(20.0);
        assert_eq!(ahp.process(code).map(|p| p.current_amount), Some(0.0));
    }

    #[test]
    fn test_sustain_delays_decay() {
        let mut ahp = AhpStat::new();
        let code = ahp.server_add_process(&shield(10.0, 2.0, 1.0, true));

        ahp.tick(1.5);
        assert_eq!(ahp.process(code).unwrap().current_amount, 10.0);

        // 0.5s of sustain left, then 1.0s of decay
        ahp.tick(1.5);
        let process = ahp.process(code).unwrap();
        assert_eq!(process.sustain_time, 0.0);
        assert!((process.current_amount - 9.0).abs() < EPSILON);
    }

    #[test]
    fn test_negative_decay_regenerates_to_limit() {
        let mut ahp = AhpStat::new();
        let code = ahp.server_add_process(&shield(10.0, 0.0, -2.0, true));
        ahp.absorb(10.0);
        assert_eq!(ahp.current_value(), 5.0);

        ahp.tick(1.0);
        assert_eq!(ahp.current_value(), 7.0);
        ahp.tick(10.0);
        assert_eq!(ahp.process(code).unwrap().current_amount, 10.0);
    }

    #[test]
    fn test_set_sustain() {
        let mut ahp = AhpStat::new();
        let code = ahp.server_add_process(&shield(10.0, 5.0, 1.0, true));
        assert!(ahp.set_sustain(code, 80.0));
        assert_eq!(ahp.process(code).unwrap().sustain_time, 80.0);
        assert!(!ahp.set_sustain(KillCode(999), 1.0));
    }
}
