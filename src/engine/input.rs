use crate::math::Vector2;

bitflags::bitflags! {
    /// Held movement and turn keys.
    #[derive(Default)]
    pub struct Motion: u16 {
        const FORWARD = 0x0001;
        const BACKWARD = 0x0002;
        const LEFT = 0x0004;
        const RIGHT = 0x0008;
        const UP = 0x0010;
        const DOWN = 0x0020;
        const TURN_LEFT = 0x0040;
        const TURN_RIGHT = 0x0080;
        const LOOK_UP = 0x0100;
        const LOOK_DOWN = 0x0200;
    }
}

/// How fast the fly camera responds to [`Input`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlightSettings {
    /// World units per second.
    pub speed: f32,
    /// Radians per second while a turn key is held.
    pub turn_rate: f32,
    /// Radians per second per unit of look delta.
    pub look_sensitivity: f32,
    /// Pitch never leaves `±pitch_limit` radians.
    pub pitch_limit: f32,
}

impl Default for FlightSettings {
    #[inline]
    fn default() -> FlightSettings {
        FlightSettings {
            speed: 8.0,
            turn_rate: 2.0,
            look_sensitivity: 5.0,
            pitch_limit: 1.5,
        }
    }
}

/// Controller state for one frame, filled in by whatever owns the window or script.
#[derive(Debug, Default, Copy, Clone)]
pub struct Input {
    look: Vector2,
    motion: Motion,
    quit: bool,
}

impl Input {
    /// Pointer motion since the last update. X turns, y pitches.
    #[inline]
    pub fn look(&self) -> Vector2 {
        self.look
    }

    #[inline]
    pub fn set_look(&mut self, value: Vector2) {
        self.look = value;
    }

    #[inline]
    pub fn add_look(&mut self, delta: Vector2) {
        self.look += delta;
    }

    /// Zero the look delta once it has been applied.
    #[inline]
    pub fn take_look(&mut self) -> Vector2 {
        let look = self.look;
        self.look = Vector2::default();
        look
    }

    #[inline]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    #[inline]
    pub fn set_motion(&mut self, value: Motion) {
        self.motion = value;
    }

    /// Press or release a set of keys.
    #[inline]
    pub fn hold(&mut self, motion: Motion, held: bool) {
        self.motion.set(motion, held);
    }

    #[inline]
    pub fn quit(&self) -> bool {
        self.quit
    }

    #[inline]
    pub fn set_quit(&mut self, value: bool) {
        self.quit = value;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn holds_and_releases_keys() {
        let mut input = Input::default();
        input.hold(Motion::FORWARD | Motion::TURN_LEFT, true);
        assert!(input.motion().contains(Motion::FORWARD));
        input.hold(Motion::FORWARD, false);
        assert_eq!(Motion::TURN_LEFT, input.motion());
    }

    #[test]
    fn look_delta_accumulates_until_taken() {
        let mut input = Input::default();
        input.add_look(Vector2::new(1.0, 0.5));
        input.add_look(Vector2::new(1.0, 0.0));
        assert_eq!(Vector2::new(2.0, 0.5), input.take_look());
        assert_eq!(Vector2::default(), input.look());
    }
}
