pub struct Flag;
#[allow(dead_code)]
impl Flag {
    pub const MADCTL_MY: u8 = 0x80;
    pub const MADCTL_MX: u8 = 0x40;
    pub const MADCTL_MV: u8 = 0x20;
    pub const MADCTL_ML: u8 = 0x10;
    pub const MADCTL_RGB: u8 = 0x00;
    pub const MADCTL_BGR: u8 = 0x08;
    pub const MADCTL_MH: u8 = 0x04;
    pub const COLOR_MODE_16BIT: u8 = 0x05;
    pub const CONTRAST_DEFAULT: u8 = 0x39;
}
