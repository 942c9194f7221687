pub struct Cmd;
#[allow(dead_code)]
impl Cmd {
    pub const NOP: u8 = 0x00;
    pub const SW_RESET: u8 = 0x01;
    pub const SLEEP_IN: u8 = 0x10;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const PARTIAL_ON: u8 = 0x12;
    pub const NORMAL_ON: u8 = 0x13;
    pub const INVERT_OFF: u8 = 0x20;
    pub const INVERT_ON: u8 = 0x21;
    pub const WRITE_CONTRAST: u8 = 0x25;
    pub const DISPLAY_OFF: u8 = 0x28;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const COLUMN_ADDR_SET: u8 = 0x2A;
    pub const ROW_ADDR_SET: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
    pub const MEMORY_ACCESS_CTRL: u8 = 0x36;
    pub const IDLE_MODE_OFF: u8 = 0x38;
    pub const COLOR_MODE: u8 = 0x3A;
}
