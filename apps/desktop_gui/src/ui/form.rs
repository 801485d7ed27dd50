use shared::{command::Command, domain::CoordinateSystem};

/// Raw contents of the form inputs, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct ControlForm {
    pub x: String,
    pub y: String,
    pub z: String,
    pub coord_system: CoordinateSystem,
    pub pipet_level: String,
}

impl ControlForm {
    pub fn move_command(&self) -> Command {
        Command::move_to(self.coord_system.as_str(), &self.x, &self.y, &self.z)
    }

    pub fn pipet_command(&self) -> Command {
        Command::pipet_control(&self.pipet_level)
    }

    pub fn request_command(&self) -> Command {
        Command::request_current_position()
    }
}
