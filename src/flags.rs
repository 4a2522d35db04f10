use core::fmt;

/// Serial port the RFLink gateway output is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Normal operation: RFLink is wired to the software serial port
    SoftwareSerial,
    /// Test mode: input is typed into the hardware serial console
    HardwareSerial,
}

impl InputSource {
    pub fn from_test_mode(test_mode: bool) -> Self {
        if test_mode {
            InputSource::HardwareSerial
        } else {
            InputSource::SoftwareSerial
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::SoftwareSerial => f.write_str("software serial"),
            InputSource::HardwareSerial => f.write_str("hardware serial"),
        }
    }
}

/// Kind of outbound broker traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Decoded RF messages
    Data,
    /// Diagnostic messages on the debug topic
    Debug,
}
