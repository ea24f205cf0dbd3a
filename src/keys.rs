//! Native-id enumerations for the known device categories.
//!
//! The discriminant of every variant is the native id the reference backends
//! use for that control, so a typed accessor can find the control without knowing
//! its logical id.

use serde::{Deserialize, Serialize};

use crate::device::{DeviceCategory, NamedControl};

macro_rules! named_controls {
    (
        $(#[$meta:meta])*
        $name:ident : $category:ident { $($variant:ident = $id:expr),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(i32)]
        pub enum $name {
            $($variant = $id),*
        }

        impl $name {
            /// Every variant, in ascending native-id order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),*
                }
            }

            pub fn from_native(id: i32) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| *v as i32 == id)
            }
        }

        impl NamedControl for $name {
            const CATEGORY: DeviceCategory = DeviceCategory::$category;

            fn native_id(self) -> i32 {
                self as i32
            }

            fn control_name(self) -> &'static str {
                self.name()
            }
        }
    };
}

named_controls! {
    /// Keyboard keys, numbered by virtual-key code.
    KeyCode: Keyboard {
        Back = 8, Tab = 9, LineFeed = 10, Clear = 12, Return = 13,
        Shift = 16, Control = 17, Menu = 18, Pause = 19, CapsLock = 20,
        Escape = 27, Space = 32, PageUp = 33, PageDown = 34, End = 35, Home = 36,
        Left = 37, Up = 38, Right = 39, Down = 40,
        Select = 41, Print = 42, Execute = 43, PrintScreen = 44, Insert = 45, Delete = 46, Help = 47,
        D0 = 48, D1 = 49, D2 = 50, D3 = 51, D4 = 52, D5 = 53, D6 = 54, D7 = 55, D8 = 56, D9 = 57,
        A = 65, B = 66, C = 67, D = 68, E = 69, F = 70, G = 71, H = 72, I = 73, J = 74,
        K = 75, L = 76, M = 77, N = 78, O = 79, P = 80, Q = 81, R = 82, S = 83, T = 84,
        U = 85, V = 86, W = 87, X = 88, Y = 89, Z = 90,
        LWin = 91, RWin = 92, Apps = 93, Sleep = 95,
        NumPad0 = 96, NumPad1 = 97, NumPad2 = 98, NumPad3 = 99, NumPad4 = 100,
        NumPad5 = 101, NumPad6 = 102, NumPad7 = 103, NumPad8 = 104, NumPad9 = 105,
        Multiply = 106, Add = 107, Separator = 108, Subtract = 109, Decimal = 110, Divide = 111,
        F1 = 112, F2 = 113, F3 = 114, F4 = 115, F5 = 116, F6 = 117, F7 = 118, F8 = 119,
        F9 = 120, F10 = 121, F11 = 122, F12 = 123, F13 = 124, F14 = 125, F15 = 126, F16 = 127,
        F17 = 128, F18 = 129, F19 = 130, F20 = 131, F21 = 132, F22 = 133, F23 = 134, F24 = 135,
        NumLock = 144, Scroll = 145,
        LShift = 160, RShift = 161, LControl = 162, RControl = 163, LMenu = 164, RMenu = 165,
        VolumeMute = 173, VolumeDown = 174, VolumeUp = 175,
        MediaNextTrack = 176, MediaPreviousTrack = 177, MediaStop = 178, MediaPlayPause = 179,
        OemSemicolon = 186, OemPlus = 187, OemComma = 188, OemMinus = 189, OemPeriod = 190,
        OemQuestion = 191, OemTilde = 192,
        OemOpenBrackets = 219, OemPipe = 220, OemCloseBrackets = 221, OemQuotes = 222,
        OemBackslash = 226,
    }
}

named_controls! {
    /// Mouse axes. `MinX`..`MaxY` report the current canvas extents.
    MouseAxis: Mouse {
        X = 1, Y = 2, Wheel = 3, MinX = 4, MaxX = 5, MinY = 6, MaxY = 7,
    }
}

named_controls! {
    MouseButton: Mouse {
        Left = 1, Right = 2, Middle = 4,
    }
}

named_controls! {
    /// Game controller axes. Sticks are `[-1, 1]`, triggers `[0, 1]`.
    ControllerAxis: GameController {
        LeftX = 0, LeftY = 1, RightX = 2, RightY = 3, LeftTrigger = 4, RightTrigger = 5,
    }
}

named_controls! {
    ControllerButton: GameController {
        A = 0, B = 1, X = 2, Y = 3,
        DPadUp = 4, DPadDown = 5, DPadLeft = 6, DPadRight = 7,
        LeftStick = 8, RightStick = 9,
        LeftShoulder = 10, RightShoulder = 11, LeftTrigger = 12, RightTrigger = 13,
        Back = 14, Start = 15, Home = 16,
    }
}
