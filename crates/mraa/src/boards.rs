//! 板级引脚编号常量
//!
//! 各板型的物理接插件编号到 mraa 逻辑引脚号的映射，照抄自 libmraa 头
//! 文件，便于调用方用板上丝印写代码而不是查表。

/// Raspberry Pi 的 Wiring 兼容编号
pub mod raspberry_wiring {
    pub const PIN8: i32 = 3;
    pub const PIN9: i32 = 5;
    pub const PIN7: i32 = 7;
    pub const PIN15: i32 = 8;
    pub const PIN16: i32 = 10;
    pub const PIN0: i32 = 11;
    pub const PIN1: i32 = 12;
    pub const PIN2: i32 = 13;
    pub const PIN3: i32 = 15;
    pub const PIN4: i32 = 16;
    pub const PIN5: i32 = 18;
    pub const PIN12: i32 = 19;
    pub const PIN13: i32 = 21;
    pub const PIN6: i32 = 22;
    pub const PIN14: i32 = 23;
    pub const PIN10: i32 = 24;
    pub const PIN11: i32 = 26;
    /// RPi B V2
    pub const PIN17: i32 = 29;
    pub const PIN21: i32 = 29;
    /// RPi B V2
    pub const PIN18: i32 = 30;
    /// RPi B V2
    pub const PIN19: i32 = 31;
    pub const PIN22: i32 = 31;
    /// RPi B V2
    pub const PIN20: i32 = 32;
    pub const PIN26: i32 = 32;
    pub const PIN23: i32 = 33;
    pub const PIN24: i32 = 35;
    pub const PIN27: i32 = 36;
    pub const PIN25: i32 = 37;
    pub const PIN28: i32 = 38;
    pub const PIN29: i32 = 40;
}

/// Intel Edison 迷你扩展板的接插件编号
pub mod edison_miniboard {
    pub const J17_1: i32 = 0;
    pub const J17_5: i32 = 4;
    pub const J17_7: i32 = 6;
    pub const J17_8: i32 = 7;
    pub const J17_9: i32 = 8;
    pub const J17_10: i32 = 9;
    pub const J17_11: i32 = 10;
    pub const J17_12: i32 = 11;
    pub const J17_14: i32 = 13;
    pub const J18_1: i32 = 14;
    pub const J18_2: i32 = 15;
    pub const J18_6: i32 = 19;
    pub const J18_7: i32 = 20;
    pub const J18_8: i32 = 21;
    pub const J18_10: i32 = 23;
    pub const J18_11: i32 = 24;
    pub const J18_12: i32 = 25;
    pub const J18_13: i32 = 26;
    pub const J19_4: i32 = 31;
    pub const J19_5: i32 = 32;
    pub const J19_6: i32 = 33;
    pub const J19_8: i32 = 35;
    pub const J19_9: i32 = 36;
    pub const J19_10: i32 = 37;
    pub const J19_11: i32 = 38;
    pub const J19_12: i32 = 39;
    pub const J19_13: i32 = 40;
    pub const J19_14: i32 = 41;
    pub const J20_3: i32 = 44;
    pub const J20_4: i32 = 45;
    pub const J20_5: i32 = 46;
    pub const J20_6: i32 = 47;
    pub const J20_7: i32 = 48;
    pub const J20_8: i32 = 49;
    pub const J20_9: i32 = 50;
    pub const J20_10: i32 = 51;
    pub const J20_11: i32 = 52;
    pub const J20_12: i32 = 53;
    pub const J20_13: i32 = 54;
    pub const J20_14: i32 = 55;
}

/// Intel Edison 的 GP 引脚编号
pub mod edison_gp {
    pub const GP182: i32 = 0;
    pub const GP135: i32 = 4;
    pub const GP27: i32 = 6;
    pub const GP20: i32 = 7;
    pub const GP28: i32 = 8;
    pub const GP111: i32 = 0;
    pub const GP109: i32 = 10;
    pub const GP115: i32 = 11;
    pub const GP128: i32 = 13;
    pub const GP13: i32 = 14;
    pub const GP165: i32 = 15;
    pub const GP19: i32 = 19;
    pub const GP12: i32 = 20;
    pub const GP183: i32 = 21;
    pub const GP110: i32 = 23;
    pub const GP114: i32 = 24;
    pub const GP129: i32 = 25;
    pub const GP130: i32 = 26;
    pub const GP44: i32 = 31;
    pub const GP46: i32 = 32;
    pub const GP48: i32 = 33;
    pub const GP131: i32 = 35;
    pub const GP14: i32 = 36;
    pub const GP40: i32 = 37;
    pub const GP43: i32 = 38;
    pub const GP77: i32 = 39;
    pub const GP82: i32 = 40;
    pub const GP83: i32 = 41;
    pub const GP134: i32 = 44;
    pub const GP45: i32 = 45;
    pub const GP47: i32 = 46;
    pub const GP49: i32 = 47;
    pub const GP15: i32 = 48;
    pub const GP84: i32 = 49;
    pub const GP42: i32 = 50;
    pub const GP41: i32 = 51;
    pub const GP78: i32 = 52;
    pub const GP79: i32 = 53;
    pub const GP80: i32 = 54;
    pub const GP81: i32 = 55;
}
