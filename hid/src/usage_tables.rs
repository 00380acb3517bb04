//! Static usage name tables (\[HUT\] Sections 4-37).
//!
//! Each table is sorted by usage ID for binary search. Pages whose names are
//! computed (Button, Ordinal, Monitor Enumerated) have no table.

/// Usage ID and name pairs for one usage page.
pub(crate) type Table = &'static [(u16, &'static str)];

/// Returns the usage table for the specified page.
pub(crate) fn table(page: u16) -> Option<Table> {
    Some(match page {
        0x01 => GENERIC_DESKTOP,
        0x02 => SIMULATION,
        0x03 => VR,
        0x04 => SPORT,
        0x05 => GAME,
        0x06 => GENERIC_DEVICE,
        0x07 => KEYBOARD,
        0x08 => LED,
        0x0B => TELEPHONY,
        0x0C => CONSUMER,
        0x0D => DIGITIZERS,
        0x0E => HAPTICS,
        0x0F => PHYSICAL_INPUT,
        0x11 => SOC,
        0x12 => EYE_HEAD_TRACKERS,
        0x14 => AUX_DISPLAY,
        0x20 => SENSORS,
        0x40 => MEDICAL,
        0x41 => BRAILLE,
        0x59 => LIGHTING,
        0x80 => MONITOR,
        0x82 => VESA,
        0x84 => POWER,
        0x85 => BATTERY,
        0x8C => BARCODE,
        0x8D => SCALES,
        0x8E => MAGNETIC_STRIPE,
        0x90 => CAMERA,
        0x91 => ARCADE,
        0xF1D0 => FIDO,
        _ => return None,
    })
}

/// Returns the registered name of a usage, if any.
pub(crate) fn lookup(page: u16, usage: u16) -> Option<&'static str> {
    let t = table(page)?;
    let i = t.binary_search_by_key(&usage, |&(id, _)| id).ok()?;
    Some(t[i].1)
}

/// Generic Desktop Page (0x01).
static GENERIC_DESKTOP: Table = &[
    (0x00, "Undefined"),
    (0x01, "Pointer"),
    (0x02, "Mouse"),
    (0x04, "Joystick"),
    (0x05, "Gamepad"),
    (0x06, "Keyboard"),
    (0x07, "Keypad"),
    (0x08, "Multi-axis Controller"),
    (0x09, "Tablet PC System Controls"),
    (0x0A, "Water Cooling Device"),
    (0x0B, "Computer Chassis Device"),
    (0x0C, "Wireless Radio Controls"),
    (0x0D, "Portable Device Control"),
    (0x0E, "System Multi-Axis Controller"),
    (0x0F, "Spatial Controller"),
    (0x10, "Assistive Control"),
    (0x11, "Device Dock"),
    (0x12, "Dockable Device"),
    (0x13, "Call State Management Control"),
    (0x30, "X"),
    (0x31, "Y"),
    (0x32, "Z"),
    (0x33, "Rx"),
    (0x34, "Ry"),
    (0x35, "Rz"),
    (0x36, "Slider"),
    (0x37, "Dial"),
    (0x38, "Wheel"),
    (0x39, "Hat Switch"),
    (0x3A, "Counted Buffer"),
    (0x3B, "Byte Count"),
    (0x3C, "Motion Wakeup"),
    (0x3D, "Start"),
    (0x3E, "Select"),
    (0x40, "Vx"),
    (0x41, "Vy"),
    (0x42, "Vz"),
    (0x43, "Vbrx"),
    (0x44, "Vbry"),
    (0x45, "Vbrz"),
    (0x46, "Vno"),
    (0x47, "Feature Notification"),
    (0x48, "Resolution Multiplier"),
    (0x49, "Qx"),
    (0x4A, "Qy"),
    (0x4B, "Qz"),
    (0x4C, "Qw"),
    (0x80, "System Control"),
    (0x81, "System Power Down"),
    (0x82, "System Sleep"),
    (0x83, "System Wake Up"),
    (0x84, "System Context Menu"),
    (0x85, "System Main Menu"),
    (0x86, "System App Menu"),
    (0x87, "System Menu Help"),
    (0x88, "System Menu Exit"),
    (0x89, "System Menu Select"),
    (0x8A, "System Menu Right"),
    (0x8B, "System Menu Left"),
    (0x8C, "System Menu Up"),
    (0x8D, "System Menu Down"),
    (0x8E, "System Cold Restart"),
    (0x8F, "System Warm Restart"),
    (0x90, "D-pad Up"),
    (0x91, "D-pad Down"),
    (0x92, "D-pad Right"),
    (0x93, "D-pad Left"),
    (0x94, "Index Trigger"),
    (0x95, "Palm Trigger"),
    (0x96, "Thumbstick"),
    (0x97, "System Function Shift"),
    (0x98, "System Function Shift Lock"),
    (0x99, "System Function Shift Lock Indicator"),
    (0x9A, "System Dismiss Notification"),
    (0x9B, "System Do Not Disturb"),
    (0xA0, "System Dock"),
    (0xA1, "System Undock"),
    (0xA2, "System Setup"),
    (0xA3, "System Break"),
    (0xA4, "System Debugger Break"),
    (0xA5, "Application Break"),
    (0xA6, "Application Debugger Break"),
    (0xA7, "System Speaker Mute"),
    (0xA8, "System Hibernate"),
    (0xA9, "System Microphone Mute"),
    (0xB0, "System Display Invert"),
    (0xB1, "System Display Internal"),
    (0xB2, "System Display External"),
    (0xB3, "System Display Both"),
    (0xB4, "System Display Dual"),
    (0xB5, "System Display Toggle Int/Ext Mode"),
    (0xB6, "System Display Swap Primary/Secondary"),
    (0xB7, "System Display Toggle LCD Autoscale"),
    (0xC0, "Sensor Zone"),
    (0xC1, "RPM"),
    (0xC2, "Coolant Level"),
    (0xC3, "Coolant Critical Level"),
    (0xC4, "Coolant Pump"),
    (0xC5, "Chassis Enclosure"),
    (0xC6, "Wireless Radio Button"),
    (0xC7, "Wireless Radio LED"),
    (0xC8, "Wireless Radio Slider Switch"),
    (0xC9, "System Display Rotation Lock Button"),
    (0xCA, "System Display Rotation Lock Slider Switch"),
    (0xCB, "Control Enable"),
    (0xD0, "Dockable Device Unique ID"),
    (0xD1, "Dockable Device Vendor ID"),
    (0xD2, "Dockable Device Primary Usage Page"),
    (0xD3, "Dockable Device Primary Usage ID"),
    (0xD4, "Dockable Device Docking State"),
    (0xD5, "Dockable Device Display Occlusion"),
    (0xD6, "Dockable Device Object Type"),
    (0xE0, "Call Active LED"),
    (0xE1, "Call Mute Toggle"),
    (0xE2, "Call Mute LED"),
];

/// Simulation Controls Page (0x02).
static SIMULATION: Table = &[
    (0x00, "Undefined"),
    (0x01, "Flight Simulation Device"),
    (0x02, "Automobile Simulation Device"),
    (0x03, "Tank Simulation Device"),
    (0x04, "Spaceship Simulation Device"),
    (0x05, "Submarine Simulation Device"),
    (0x06, "Sailing Simulation Device"),
    (0x07, "Motorcycle Simulation Device"),
    (0x08, "Sports Simulation Device"),
    (0x09, "Airplane Simulation Device"),
    (0x0A, "Helicopter Simulation Device"),
    (0x0B, "Magic Carpet Simulation Device"),
    (0x0C, "Bicycle Simulation Device"),
    (0x20, "Flight Control Stick"),
    (0x21, "Flight Stick"),
    (0x22, "Cyclic Control"),
    (0x23, "Cyclic Trim"),
    (0x24, "Flight Yoke"),
    (0x25, "Track Control"),
    (0xB0, "Aileron"),
    (0xB1, "Aileron Trim"),
    (0xB2, "Anti-Torque Control"),
    (0xB3, "Autopilot Enable"),
    (0xB4, "Chaff Release"),
    (0xB5, "Collective Control"),
    (0xB6, "Dive Brake"),
    (0xB7, "Electronic Countermeasures"),
    (0xB8, "Elevator"),
    (0xB9, "Elevator Trim"),
    (0xBA, "Rudder"),
    (0xBB, "Throttle"),
    (0xBC, "Flight Communications"),
    (0xBD, "Flare Release"),
    (0xBE, "Landing Gear"),
    (0xBF, "Toe Brake"),
    (0xC0, "Trigger"),
    (0xC1, "Weapons Arm"),
    (0xC2, "Weapons Select"),
    (0xC3, "Wing Flaps"),
    (0xC4, "Accelerator"),
    (0xC5, "Brake"),
    (0xC6, "Clutch"),
    (0xC7, "Shifter"),
    (0xC8, "Steering"),
    (0xC9, "Turret Direction"),
    (0xCA, "Barrel Elevation"),
    (0xCB, "Dive Plane"),
    (0xCC, "Ballast"),
    (0xCD, "Bicycle Crank"),
    (0xCE, "Handle Bars"),
    (0xCF, "Front Brake"),
    (0xD0, "Rear Brake"),
];

/// VR Controls Page (0x03).
static VR: Table = &[
    (0x00, "Undefined"),
    (0x01, "Belt"),
    (0x02, "Body Suit"),
    (0x03, "Flexor"),
    (0x04, "Glove"),
    (0x05, "Head Tracker"),
    (0x06, "Head Mounted Display"),
    (0x07, "Hand Tracker"),
    (0x08, "Oculometer"),
    (0x09, "Vest"),
    (0x0A, "Animatronic Device"),
    (0x20, "Stereo Enable"),
    (0x21, "Display Enable"),
];

/// Sport Controls Page (0x04).
static SPORT: Table = &[
    (0x00, "Undefined"),
    (0x01, "Baseball Bat"),
    (0x02, "Golf Club"),
    (0x03, "Rowing Machine"),
    (0x04, "Treadmill"),
    (0x30, "Oar"),
    (0x31, "Slope"),
    (0x32, "Rate"),
    (0x33, "Stick Speed"),
    (0x34, "Stick Face Angle"),
    (0x35, "Stick Heel/Toe"),
    (0x36, "Stick Follow Through"),
    (0x37, "Stick Tempo"),
    (0x38, "Stick Type"),
    (0x39, "Stick Height"),
    (0x50, "Putter"),
    (0x51, "1 Iron"),
    (0x52, "2 Iron"),
    (0x53, "3 Iron"),
    (0x54, "4 Iron"),
    (0x55, "5 Iron"),
    (0x56, "6 Iron"),
    (0x57, "7 Iron"),
    (0x58, "8 Iron"),
    (0x59, "9 Iron"),
    (0x5A, "10 Iron"),
    (0x5B, "11 Iron"),
    (0x5C, "Sand Wedge"),
    (0x5D, "Loft Wedge"),
    (0x5E, "Power Wedge"),
    (0x5F, "1 Wood"),
    (0x60, "3 Wood"),
    (0x61, "5 Wood"),
    (0x62, "7 Wood"),
    (0x63, "9 Wood"),
];

/// Game Controls Page (0x05).
static GAME: Table = &[
    (0x00, "Undefined"),
    (0x01, "3D Game Controller"),
    (0x02, "Pinball Device"),
    (0x03, "Gun Device"),
    (0x20, "Point of View"),
    (0x21, "Turn Right/Left"),
    (0x22, "Pitch Forward/Backward"),
    (0x23, "Roll Right/Left"),
    (0x24, "Move Right/Left"),
    (0x25, "Move Forward/Backward"),
    (0x26, "Move Up/Down"),
    (0x27, "Lean Right/Left"),
    (0x28, "Lean Forward/Backward"),
    (0x29, "Height of POV"),
    (0x2A, "Flipper"),
    (0x2B, "Secondary Flipper"),
    (0x2C, "Bump"),
    (0x2D, "New Game"),
    (0x2E, "Shoot Ball"),
    (0x2F, "Player"),
    (0x30, "Gun Bolt"),
    (0x31, "Gun Clip"),
    (0x32, "Gun Selector"),
    (0x33, "Gun Single Shot"),
    (0x34, "Gun Burst"),
    (0x35, "Gun Automatic"),
    (0x36, "Gun Safety"),
    (0x37, "Gamepad Fire/Jump"),
    (0x39, "Gamepad Trigger"),
    (0x3A, "Form-fitting Gamepad"),
];

/// Generic Device Controls Page (0x06).
static GENERIC_DEVICE: Table = &[
    (0x00, "Undefined"),
    (0x01, "Background/Nonuser Controls"),
    (0x20, "Battery Strength"),
    (0x21, "Wireless Channel"),
    (0x22, "Wireless ID"),
    (0x23, "Discover Wireless Control"),
    (0x24, "Security Code Character Entered"),
    (0x25, "Security Code Character Erased"),
    (0x26, "Security Code Cleared"),
    (0x27, "Sequence ID"),
    (0x28, "Sequence ID Reset"),
    (0x29, "RF Signal Strength"),
    (0x2A, "Software Version"),
    (0x2B, "Protocol Version"),
    (0x2C, "Hardware Version"),
    (0x2D, "Major"),
    (0x2E, "Minor"),
    (0x2F, "Revision"),
    (0x30, "Handedness"),
    (0x31, "Either Hand"),
    (0x32, "Left Hand"),
    (0x33, "Right Hand"),
    (0x34, "Both Hands"),
    (0x40, "Grip Pose Offset"),
    (0x41, "Pointer Pose Offset"),
];

/// Keyboard/Keypad Page (0x07).
static KEYBOARD: Table = &[
    (0x00, "Reserved"),
    (0x01, "Keyboard ErrorRollOver"),
    (0x02, "Keyboard POSTFail"),
    (0x03, "Keyboard ErrorUndefined"),
    (0x04, "Keyboard a and A"),
    (0x05, "Keyboard b and B"),
    (0x06, "Keyboard c and C"),
    (0x07, "Keyboard d and D"),
    (0x08, "Keyboard e and E"),
    (0x09, "Keyboard f and F"),
    (0x0A, "Keyboard g and G"),
    (0x0B, "Keyboard h and H"),
    (0x0C, "Keyboard i and I"),
    (0x0D, "Keyboard j and J"),
    (0x0E, "Keyboard k and K"),
    (0x0F, "Keyboard l and L"),
    (0x10, "Keyboard m and M"),
    (0x11, "Keyboard n and N"),
    (0x12, "Keyboard o and O"),
    (0x13, "Keyboard p and P"),
    (0x14, "Keyboard q and Q"),
    (0x15, "Keyboard r and R"),
    (0x16, "Keyboard s and S"),
    (0x17, "Keyboard t and T"),
    (0x18, "Keyboard u and U"),
    (0x19, "Keyboard v and V"),
    (0x1A, "Keyboard w and W"),
    (0x1B, "Keyboard x and X"),
    (0x1C, "Keyboard y and Y"),
    (0x1D, "Keyboard z and Z"),
    (0x1E, "Keyboard 1 and !"),
    (0x1F, "Keyboard 2 and @"),
    (0x20, "Keyboard 3 and #"),
    (0x21, "Keyboard 4 and $"),
    (0x22, "Keyboard 5 and %"),
    (0x23, "Keyboard 6 and ^"),
    (0x24, "Keyboard 7 and &"),
    (0x25, "Keyboard 8 and *"),
    (0x26, "Keyboard 9 and ("),
    (0x27, "Keyboard 0 and )"),
    (0x28, "Keyboard Return (ENTER)"),
    (0x29, "Keyboard ESCAPE"),
    (0x2A, "Keyboard DELETE (Backspace)"),
    (0x2B, "Keyboard Tab"),
    (0x2C, "Keyboard Spacebar"),
    (0x2D, "Keyboard - and (underscore)"),
    (0x2E, "Keyboard = and +"),
    (0x2F, "Keyboard [ and {"),
    (0x30, "Keyboard ] and }"),
    (0x31, "Keyboard \\ and |"),
    (0x32, "Keyboard Non-US # and ~"),
    (0x33, "Keyboard ; and :"),
    (0x34, "Keyboard ' and \""),
    (0x35, "Keyboard Grave Accent and Tilde"),
    (0x36, "Keyboard , and <"),
    (0x37, "Keyboard . and >"),
    (0x38, "Keyboard / and ?"),
    (0x39, "Keyboard Caps Lock"),
    (0x3A, "Keyboard F1"),
    (0x3B, "Keyboard F2"),
    (0x3C, "Keyboard F3"),
    (0x3D, "Keyboard F4"),
    (0x3E, "Keyboard F5"),
    (0x3F, "Keyboard F6"),
    (0x40, "Keyboard F7"),
    (0x41, "Keyboard F8"),
    (0x42, "Keyboard F9"),
    (0x43, "Keyboard F10"),
    (0x44, "Keyboard F11"),
    (0x45, "Keyboard F12"),
    (0x46, "Keyboard PrintScreen"),
    (0x47, "Keyboard Scroll Lock"),
    (0x48, "Keyboard Pause"),
    (0x49, "Keyboard Insert"),
    (0x4A, "Keyboard Home"),
    (0x4B, "Keyboard PageUp"),
    (0x4C, "Keyboard Delete Forward"),
    (0x4D, "Keyboard End"),
    (0x4E, "Keyboard PageDown"),
    (0x4F, "Keyboard RightArrow"),
    (0x50, "Keyboard LeftArrow"),
    (0x51, "Keyboard DownArrow"),
    (0x52, "Keyboard UpArrow"),
    (0x53, "Keypad Num Lock and Clear"),
    (0x54, "Keypad /"),
    (0x55, "Keypad *"),
    (0x56, "Keypad -"),
    (0x57, "Keypad +"),
    (0x58, "Keypad ENTER"),
    (0x59, "Keypad 1 and End"),
    (0x5A, "Keypad 2 and Down Arrow"),
    (0x5B, "Keypad 3 and PageDn"),
    (0x5C, "Keypad 4 and Left Arrow"),
    (0x5D, "Keypad 5"),
    (0x5E, "Keypad 6 and Right Arrow"),
    (0x5F, "Keypad 7 and Home"),
    (0x60, "Keypad 8 and Up Arrow"),
    (0x61, "Keypad 9 and PageUp"),
    (0x62, "Keypad 0 and Insert"),
    (0x63, "Keypad . and Delete"),
    (0x64, "Keyboard Non-US \\ and |"),
    (0x65, "Keyboard Application"),
    (0x66, "Keyboard Power"),
    (0x67, "Keypad ="),
    (0x68, "Keyboard F13"),
    (0x69, "Keyboard F14"),
    (0x6A, "Keyboard F15"),
    (0x6B, "Keyboard F16"),
    (0x6C, "Keyboard F17"),
    (0x6D, "Keyboard F18"),
    (0x6E, "Keyboard F19"),
    (0x6F, "Keyboard F20"),
    (0x70, "Keyboard F21"),
    (0x71, "Keyboard F22"),
    (0x72, "Keyboard F23"),
    (0x73, "Keyboard F24"),
    (0x74, "Keyboard Execute"),
    (0x75, "Keyboard Help"),
    (0x76, "Keyboard Menu"),
    (0x77, "Keyboard Select"),
    (0x78, "Keyboard Stop"),
    (0x79, "Keyboard Again"),
    (0x7A, "Keyboard Undo"),
    (0x7B, "Keyboard Cut"),
    (0x7C, "Keyboard Copy"),
    (0x7D, "Keyboard Paste"),
    (0x7E, "Keyboard Find"),
    (0x7F, "Keyboard Mute"),
    (0x80, "Keyboard Volume Up"),
    (0x81, "Keyboard Volume Down"),
    (0x82, "Keyboard Locking Caps Lock"),
    (0x83, "Keyboard Locking Num Lock"),
    (0x84, "Keyboard Locking Scroll Lock"),
    (0x85, "Keypad Comma"),
    (0x86, "Keypad Equal Sign"),
    (0x87, "Keyboard International1"),
    (0x88, "Keyboard International2"),
    (0x89, "Keyboard International3"),
    (0x8A, "Keyboard International4"),
    (0x8B, "Keyboard International5"),
    (0x8C, "Keyboard International6"),
    (0x8D, "Keyboard International7"),
    (0x8E, "Keyboard International8"),
    (0x8F, "Keyboard International9"),
    (0x90, "Keyboard LANG1"),
    (0x91, "Keyboard LANG2"),
    (0x92, "Keyboard LANG3"),
    (0x93, "Keyboard LANG4"),
    (0x94, "Keyboard LANG5"),
    (0x95, "Keyboard LANG6"),
    (0x96, "Keyboard LANG7"),
    (0x97, "Keyboard LANG8"),
    (0x98, "Keyboard LANG9"),
    (0x99, "Keyboard Alternate Erase"),
    (0x9A, "Keyboard SysReq/Attention"),
    (0x9B, "Keyboard Cancel"),
    (0x9C, "Keyboard Clear"),
    (0x9D, "Keyboard Prior"),
    (0x9E, "Keyboard Return"),
    (0x9F, "Keyboard Separator"),
    (0xA0, "Keyboard Out"),
    (0xA1, "Keyboard Oper"),
    (0xA2, "Keyboard Clear/Again"),
    (0xA3, "Keyboard CrSel/Props"),
    (0xA4, "Keyboard ExSel"),
    (0xB0, "Keypad 00"),
    (0xB1, "Keypad 000"),
    (0xB2, "Thousands Separator"),
    (0xB3, "Decimal Separator"),
    (0xB4, "Currency Unit"),
    (0xB5, "Currency Sub-unit"),
    (0xB6, "Keypad ("),
    (0xB7, "Keypad )"),
    (0xB8, "Keypad {"),
    (0xB9, "Keypad }"),
    (0xBA, "Keypad Tab"),
    (0xBB, "Keypad Backspace"),
    (0xBC, "Keypad A"),
    (0xBD, "Keypad B"),
    (0xBE, "Keypad C"),
    (0xBF, "Keypad D"),
    (0xC0, "Keypad E"),
    (0xC1, "Keypad F"),
    (0xC2, "Keypad XOR"),
    (0xC3, "Keypad ^"),
    (0xC4, "Keypad %"),
    (0xC5, "Keypad <"),
    (0xC6, "Keypad >"),
    (0xC7, "Keypad &"),
    (0xC8, "Keypad &&"),
    (0xC9, "Keypad |"),
    (0xCA, "Keypad ||"),
    (0xCB, "Keypad :"),
    (0xCC, "Keypad #"),
    (0xCD, "Keypad Space"),
    (0xCE, "Keypad @"),
    (0xCF, "Keypad !"),
    (0xD0, "Keypad Memory Store"),
    (0xD1, "Keypad Memory Recall"),
    (0xD2, "Keypad Memory Clear"),
    (0xD3, "Keypad Memory Add"),
    (0xD4, "Keypad Memory Subtract"),
    (0xD5, "Keypad Memory Multiply"),
    (0xD6, "Keypad Memory Divide"),
    (0xD7, "Keypad +/-"),
    (0xD8, "Keypad Clear"),
    (0xD9, "Keypad Clear Entry"),
    (0xDA, "Keypad Binary"),
    (0xDB, "Keypad Octal"),
    (0xDC, "Keypad Decimal"),
    (0xDD, "Keypad Hexadecimal"),
    (0xE0, "Keyboard LeftControl"),
    (0xE1, "Keyboard LeftShift"),
    (0xE2, "Keyboard LeftAlt"),
    (0xE3, "Keyboard Left GUI"),
    (0xE4, "Keyboard RightControl"),
    (0xE5, "Keyboard RightShift"),
    (0xE6, "Keyboard RightAlt"),
    (0xE7, "Keyboard Right GUI"),
];

/// LED Page (0x08).
static LED: Table = &[
    (0x00, "Undefined"),
    (0x01, "Num Lock"),
    (0x02, "Caps Lock"),
    (0x03, "Scroll Lock"),
    (0x04, "Compose"),
    (0x05, "Kana"),
    (0x06, "Power"),
    (0x07, "Shift"),
    (0x08, "Do Not Disturb"),
    (0x09, "Mute"),
    (0x0A, "Tone Enable"),
    (0x0B, "High Cut Filter"),
    (0x0C, "Low Cut Filter"),
    (0x0D, "Equalizer Enable"),
    (0x0E, "Sound Field On"),
    (0x0F, "Surround On"),
    (0x10, "Repeat"),
    (0x11, "Stereo"),
    (0x12, "Sampling Rate Detect"),
    (0x13, "Spinning"),
    (0x14, "CAV"),
    (0x15, "CLV"),
    (0x16, "Recording Format Detect"),
    (0x17, "Off-Hook"),
    (0x18, "Ring"),
    (0x19, "Message Waiting"),
    (0x1A, "Data Mode"),
    (0x1B, "Battery Operation"),
    (0x1C, "Battery OK"),
    (0x1D, "Battery Low"),
    (0x1E, "Speaker"),
    (0x1F, "Headset"),
    (0x20, "Hold"),
    (0x21, "Microphone"),
    (0x22, "Coverage"),
    (0x23, "Night Mode"),
    (0x24, "Send Calls"),
    (0x25, "Call Pickup"),
    (0x26, "Conference"),
    (0x27, "Stand-by"),
    (0x28, "Camera On"),
    (0x29, "Camera Off"),
    (0x2A, "On-Line"),
    (0x2B, "Off-Line"),
    (0x2C, "Busy"),
    (0x2D, "Ready"),
    (0x2E, "Paper-Out"),
    (0x2F, "Paper-Jam"),
    (0x30, "Remote"),
    (0x31, "Forward"),
    (0x32, "Reverse"),
    (0x33, "Stop"),
    (0x34, "Rewind"),
    (0x35, "Fast Forward"),
    (0x36, "Play"),
    (0x37, "Pause"),
    (0x38, "Record"),
    (0x39, "Error"),
    (0x3A, "Usage Selected Indicator"),
    (0x3B, "Usage In Use Indicator"),
    (0x3C, "Usage Multi Mode Indicator"),
    (0x3D, "Indicator On"),
    (0x3E, "Indicator Flash"),
    (0x3F, "Indicator Slow Blink"),
    (0x40, "Indicator Fast Blink"),
    (0x41, "Indicator Off"),
    (0x42, "Flash On Time"),
    (0x43, "Slow Blink On Time"),
    (0x44, "Slow Blink Off Time"),
    (0x45, "Fast Blink On Time"),
    (0x46, "Fast Blink Off Time"),
    (0x47, "Usage Indicator Color"),
    (0x48, "Indicator Red"),
    (0x49, "Indicator Green"),
    (0x4A, "Indicator Amber"),
    (0x4B, "Generic Indicator"),
    (0x4C, "System Suspend"),
    (0x4D, "External Power Connected"),
    (0x4E, "Indicator Blue"),
    (0x4F, "Indicator Orange"),
    (0x50, "Good Status"),
    (0x51, "Warning Status"),
    (0x52, "RGB LED"),
    (0x53, "Red LED Channel"),
    (0x54, "Blue LED Channel"),
    (0x55, "Green LED Channel"),
    (0x56, "LED Intensity"),
    (0x57, "System Microphone Mute"),
    (0x60, "Player Indicator"),
    (0x61, "Player 1"),
    (0x62, "Player 2"),
    (0x63, "Player 3"),
    (0x64, "Player 4"),
    (0x65, "Player 5"),
    (0x66, "Player 6"),
    (0x67, "Player 7"),
    (0x68, "Player 8"),
];

/// Telephony Device Page (0x0B).
static TELEPHONY: Table = &[
    (0x0000, "Undefined"),
    (0x0001, "Phone"),
    (0x0002, "Answering Machine"),
    (0x0003, "Message Controls"),
    (0x0004, "Handset"),
    (0x0005, "Headset"),
    (0x0006, "Telephony Key Pad"),
    (0x0007, "Programmable Button"),
    (0x0020, "Hook Switch"),
    (0x0021, "Flash"),
    (0x0022, "Feature"),
    (0x0023, "Hold"),
    (0x0024, "Redial"),
    (0x0025, "Transfer"),
    (0x0026, "Drop"),
    (0x0027, "Park"),
    (0x0028, "Forward Calls"),
    (0x0029, "Alternate Function"),
    (0x002A, "Line"),
    (0x002B, "Speaker Phone"),
    (0x002C, "Conference"),
    (0x002D, "Ring Enable"),
    (0x002E, "Ring Select"),
    (0x002F, "Phone Mute"),
    (0x0030, "Caller ID"),
    (0x0031, "Send"),
    (0x0050, "Speed Dial"),
    (0x0051, "Store Number"),
    (0x0052, "Recall Number"),
    (0x0053, "Phone Directory"),
    (0x0070, "Voice Mail"),
    (0x0071, "Screen Calls"),
    (0x0072, "Do Not Disturb"),
    (0x0073, "Message"),
    (0x0074, "Answer On/Off"),
    (0x0090, "Inside Dial Tone"),
    (0x0091, "Outside Dial Tone"),
    (0x0092, "Inside Ring Tone"),
    (0x0093, "Outside Ring Tone"),
    (0x0094, "Priority Ring Tone"),
    (0x0095, "Inside Ringback"),
    (0x0096, "Priority Ringback"),
    (0x0097, "Line Busy Tone"),
    (0x0098, "Reorder Tone"),
    (0x0099, "Call Waiting Tone"),
    (0x009A, "Confirmation Tone 1"),
    (0x009B, "Confirmation Tone 2"),
    (0x009C, "Tones Off"),
    (0x009D, "Outside Ringback"),
    (0x009E, "Ringer"),
    (0x00B0, "Phone Key 0"),
    (0x00B1, "Phone Key 1"),
    (0x00B2, "Phone Key 2"),
    (0x00B3, "Phone Key 3"),
    (0x00B4, "Phone Key 4"),
    (0x00B5, "Phone Key 5"),
    (0x00B6, "Phone Key 6"),
    (0x00B7, "Phone Key 7"),
    (0x00B8, "Phone Key 8"),
    (0x00B9, "Phone Key 9"),
    (0x00BA, "Phone Key Star"),
    (0x00BB, "Phone Key Pound"),
    (0x00BC, "Phone Key A"),
    (0x00BD, "Phone Key B"),
    (0x00BE, "Phone Key C"),
    (0x00BF, "Phone Key D"),
    (0x00C0, "Phone Call History Key"),
    (0x00C1, "Phone Caller ID Key"),
    (0x00C2, "Phone Settings Key"),
    (0x00F0, "Host Control"),
    (0x00F1, "Host Available"),
    (0x00F2, "Host Call Active"),
    (0x00F3, "Activate Handset Audio"),
    (0x00F4, "Ring Type"),
    (0x00F5, "Re-dialable Phone Number"),
    (0x00F8, "Stop Ring Tone"),
    (0x00F9, "PSTN Ring Tone"),
    (0x00FA, "Host Ring Tone"),
    (0x00FB, "Alert Sound Error"),
    (0x00FC, "Alert Sound Confirm"),
    (0x00FD, "Alert Sound Notification"),
    (0x00FE, "Silent Ring"),
    (0x0108, "Email Message Waiting"),
    (0x0109, "Voicemail Message Waiting"),
    (0x010A, "Host Hold"),
    (0x0110, "Incoming Call History Count"),
    (0x0111, "Outgoing Call History Count"),
    (0x0112, "Incoming Call History"),
    (0x0113, "Outgoing Call History"),
    (0x0114, "Phone Locale"),
];

/// Consumer Page (0x0C).
static CONSUMER: Table = &[
    (0x0000, "Undefined"),
    (0x0001, "Consumer Control"),
    (0x0002, "Numeric Key Pad"),
    (0x0003, "Programmable Buttons"),
    (0x0004, "Microphone"),
    (0x0005, "Headphone"),
    (0x0006, "Graphic Equalizer"),
    (0x0020, "+10"),
    (0x0021, "+100"),
    (0x0022, "AM/PM"),
    (0x0030, "Power"),
    (0x0031, "Reset"),
    (0x0032, "Sleep"),
    (0x0033, "Sleep After"),
    (0x0034, "Sleep Mode"),
    (0x0035, "Illumination"),
    (0x0036, "Function Buttons"),
    (0x0040, "Menu"),
    (0x0041, "Menu Pick"),
    (0x0042, "Menu Up"),
    (0x0043, "Menu Down"),
    (0x0044, "Menu Left"),
    (0x0045, "Menu Right"),
    (0x0046, "Menu Escape"),
    (0x0047, "Menu Value Increase"),
    (0x0048, "Menu Value Decrease"),
    (0x0060, "Data On Screen"),
    (0x0061, "Closed Caption"),
    (0x0062, "Closed Caption Select"),
    (0x0063, "VCR/TV"),
    (0x0064, "Broadcast Mode"),
    (0x0065, "Snapshot"),
    (0x0066, "Still"),
    (0x0067, "Picture-in-Picture Toggle"),
    (0x0068, "Picture-in-Picture Swap"),
    (0x0069, "Red Menu Button"),
    (0x006A, "Green Menu Button"),
    (0x006B, "Blue Menu Button"),
    (0x006C, "Yellow Menu Button"),
    (0x006D, "Aspect"),
    (0x006E, "3D Mode Select"),
    (0x006F, "Display Brightness Increment"),
    (0x0070, "Display Brightness Decrement"),
    (0x0071, "Display Brightness"),
    (0x0072, "Display Backlight Toggle"),
    (0x0073, "Display Set Brightness to Minimum"),
    (0x0074, "Display Set Brightness to Maximum"),
    (0x0075, "Display Set Auto Brightness"),
    (0x0076, "Camera Access Enabled"),
    (0x0077, "Camera Access Disabled"),
    (0x0078, "Camera Access Toggle"),
    (0x0079, "Keyboard Brightness Increment"),
    (0x007A, "Keyboard Brightness Decrement"),
    (0x007B, "Keyboard Backlight Set Level"),
    (0x007C, "Keyboard Backlight OOC"),
    (0x007D, "Keyboard Backlight Set Minimum"),
    (0x007E, "Keyboard Backlight Set Maximum"),
    (0x007F, "Keyboard Backlight Auto"),
    (0x0080, "Selection"),
    (0x0081, "Assign Selection"),
    (0x0082, "Mode Step"),
    (0x0083, "Recall Last"),
    (0x0084, "Enter Channel"),
    (0x0085, "Order Movie"),
    (0x0086, "Channel"),
    (0x0087, "Media Selection"),
    (0x0088, "Media Select Computer"),
    (0x0089, "Media Select TV"),
    (0x008A, "Media Select WWW"),
    (0x008B, "Media Select DVD"),
    (0x008C, "Media Select Telephone"),
    (0x008D, "Media Select Program Guide"),
    (0x008E, "Media Select Video Phone"),
    (0x008F, "Media Select Games"),
    (0x0090, "Media Select Messages"),
    (0x0091, "Media Select CD"),
    (0x0092, "Media Select VCR"),
    (0x0093, "Media Select Tuner"),
    (0x0094, "Quit"),
    (0x0095, "Help"),
    (0x0096, "Media Select Tape"),
    (0x0097, "Media Select Cable"),
    (0x0098, "Media Select Satellite"),
    (0x0099, "Media Select Security"),
    (0x009A, "Media Select Home"),
    (0x009B, "Media Select Call"),
    (0x009C, "Channel Increment"),
    (0x009D, "Channel Decrement"),
    (0x009E, "Media Select SAP"),
    (0x00A0, "VCR Plus"),
    (0x00A1, "Once"),
    (0x00A2, "Daily"),
    (0x00A3, "Weekly"),
    (0x00A4, "Monthly"),
    (0x00B0, "Play"),
    (0x00B1, "Pause"),
    (0x00B2, "Record"),
    (0x00B3, "Fast Forward"),
    (0x00B4, "Rewind"),
    (0x00B5, "Scan Next Track"),
    (0x00B6, "Scan Previous Track"),
    (0x00B7, "Stop"),
    (0x00B8, "Eject"),
    (0x00B9, "Random Play"),
    (0x00BA, "Select Disc"),
    (0x00BB, "Enter Disc"),
    (0x00BC, "Repeat"),
    (0x00BD, "Tracking"),
    (0x00BE, "Track Normal"),
    (0x00BF, "Slow Tracking"),
    (0x00C0, "Frame Forward"),
    (0x00C1, "Frame Back"),
    (0x00C2, "Mark"),
    (0x00C3, "Clear Mark"),
    (0x00C4, "Repeat From Mark"),
    (0x00C5, "Return To Mark"),
    (0x00C6, "Search Mark Forward"),
    (0x00C7, "Search Mark Backwards"),
    (0x00C8, "Counter Reset"),
    (0x00C9, "Show Counter"),
    (0x00CA, "Tracking Increment"),
    (0x00CB, "Tracking Decrement"),
    (0x00CC, "Stop/Eject"),
    (0x00CD, "Play/Pause"),
    (0x00CE, "Play/Skip"),
    (0x00CF, "Voice Command"),
    (0x00D0, "Invoke Capture Interface"),
    (0x00D1, "Start or Stop Game Recording"),
    (0x00D2, "Historical Game Capture"),
    (0x00D3, "Capture Game Screenshot"),
    (0x00D4, "Show or Hide Recording Indicator"),
    (0x00D5, "Start or Stop Microphone Capture"),
    (0x00D6, "Start or Stop Camera Capture"),
    (0x00D7, "Start or Stop Game Broadcast"),
    (0x00D8, "Start or Stop Voice Dictation Session"),
    (0x00D9, "Invoke/Dismiss Emoji Picker"),
    (0x00E0, "Volume"),
    (0x00E1, "Balance"),
    (0x00E2, "Mute"),
    (0x00E3, "Bass"),
    (0x00E4, "Treble"),
    (0x00E5, "Bass Boost"),
    (0x00E6, "Surround Mode"),
    (0x00E7, "Loudness"),
    (0x00E8, "MPX"),
    (0x00E9, "Volume Increment"),
    (0x00EA, "Volume Decrement"),
    (0x00F0, "Speed Select"),
    (0x00F1, "Playback Speed"),
    (0x00F2, "Standard Play"),
    (0x00F3, "Long Play"),
    (0x00F4, "Extended Play"),
    (0x00F5, "Slow"),
    (0x0100, "Fan Enable"),
    (0x0101, "Fan Speed"),
    (0x0102, "Light Enable"),
    (0x0103, "Light Illumination Level"),
    (0x0104, "Climate Control Enable"),
    (0x0105, "Room Temperature"),
    (0x0106, "Security Enable"),
    (0x0107, "Fire Alarm"),
    (0x0108, "Police Alarm"),
    (0x0109, "Proximity"),
    (0x010A, "Motion"),
    (0x010B, "Duress Alarm"),
    (0x010C, "Holdup Alarm"),
    (0x010D, "Medical Alarm"),
    (0x0150, "Balance Right"),
    (0x0151, "Balance Left"),
    (0x0152, "Bass Increment"),
    (0x0153, "Bass Decrement"),
    (0x0154, "Treble Increment"),
    (0x0155, "Treble Decrement"),
    (0x0160, "Speaker System"),
    (0x0161, "Channel Left"),
    (0x0162, "Channel Right"),
    (0x0163, "Channel Center"),
    (0x0164, "Channel Front"),
    (0x0165, "Channel Center Front"),
    (0x0166, "Channel Side"),
    (0x0167, "Channel Surround"),
    (0x0168, "Channel Low Frequency Enhancement"),
    (0x0169, "Channel Top"),
    (0x016A, "Channel Unknown"),
    (0x0170, "Sub-channel"),
    (0x0171, "Sub-channel Increment"),
    (0x0172, "Sub-channel Decrement"),
    (0x0173, "Alternate Audio Increment"),
    (0x0174, "Alternate Audio Decrement"),
    (0x0180, "Application Launch Buttons"),
    (0x0181, "AL Launch Button Configuration Tool"),
    (0x0182, "AL Programmable Button Configuration"),
    (0x0183, "AL Consumer Control Configuration"),
    (0x0184, "AL Word Processor"),
    (0x0185, "AL Text Editor"),
    (0x0186, "AL Spreadsheet"),
    (0x0187, "AL Graphics Editor"),
    (0x0188, "AL Presentation App"),
    (0x0189, "AL Database App"),
    (0x018A, "AL Email Reader"),
    (0x018B, "AL Newsreader"),
    (0x018C, "AL Voicemail"),
    (0x018D, "AL Contacts/Address Book"),
    (0x018E, "AL Calendar/Schedule"),
    (0x018F, "AL Task/Project Manager"),
    (0x0190, "AL Log/Journal/Timecard"),
    (0x0191, "AL Checkbook/Finance"),
    (0x0192, "AL Calculator"),
    (0x0193, "AL A/V Capture/Playback"),
    (0x0194, "AL Local Machine Browser"),
    (0x0195, "AL LAN/WAN Browser"),
    (0x0196, "AL Internet Browser"),
    (0x0197, "AL Remote Networking/ISP Connect"),
    (0x0198, "AL Network Conference"),
    (0x0199, "AL Network Chat"),
    (0x019A, "AL Telephony/Dialer"),
    (0x019B, "AL Logon"),
    (0x019C, "AL Logoff"),
    (0x019D, "AL Logon/Logoff"),
    (0x019E, "AL Terminal Lock/Screensaver"),
    (0x019F, "AL Control Panel"),
    (0x01A0, "AL Command Line Processor/Run"),
    (0x01A1, "AL Process/Task Manager"),
    (0x01A2, "AL Select Task/Application"),
    (0x01A3, "AL Next Task/Application"),
    (0x01A4, "AL Previous Task/Application"),
    (0x01A5, "AL Preemptive Halt Task/Application"),
    (0x01A6, "AL Integrated Help Center"),
    (0x01A7, "AL Documents"),
    (0x01A8, "AL Thesaurus"),
    (0x01A9, "AL Dictionary"),
    (0x01AA, "AL Desktop"),
    (0x01AB, "AL Spell Check"),
    (0x01AC, "AL Grammar Check"),
    (0x01AD, "AL Wireless Status"),
    (0x01AE, "AL Keyboard Layout"),
    (0x01AF, "AL Virus Protection"),
    (0x01B0, "AL Encryption"),
    (0x01B1, "AL Screen Saver"),
    (0x01B2, "AL Alarms"),
    (0x01B3, "AL Clock"),
    (0x01B4, "AL File Browser"),
    (0x01B5, "AL Power Status"),
    (0x01B6, "AL Image Browser"),
    (0x01B7, "AL Audio Browser"),
    (0x01B8, "AL Movie Browser"),
    (0x01B9, "AL Digital Rights Manager"),
    (0x01BA, "AL Digital Wallet"),
    (0x01BC, "AL Instant Messaging"),
    (0x01BD, "AL OEM Features/Tips/Tutorial Browser"),
    (0x01BE, "AL OEM Help"),
    (0x01BF, "AL Online Community"),
    (0x01C0, "AL Entertainment Content Browser"),
    (0x01C1, "AL Online Shopping Browser"),
    (0x01C2, "AL SmartCard Information/Help"),
    (0x01C3, "AL Market Monitor/Finance Browser"),
    (0x01C4, "AL Customized Corporate News Browser"),
    (0x01C5, "AL Online Activity Browser"),
    (0x01C6, "AL Research/Search Browser"),
    (0x01C7, "AL Audio Player"),
    (0x01C8, "AL Message Status"),
    (0x01C9, "AL Contact Sync"),
    (0x01CA, "AL Navigation"),
    (0x01CB, "AL Context-aware Desktop Assistant"),
    (0x0200, "Generic GUI Application Controls"),
    (0x0201, "AC New"),
    (0x0202, "AC Open"),
    (0x0203, "AC Close"),
    (0x0204, "AC Exit"),
    (0x0205, "AC Maximize"),
    (0x0206, "AC Minimize"),
    (0x0207, "AC Save"),
    (0x0208, "AC Print"),
    (0x0209, "AC Properties"),
    (0x021A, "AC Undo"),
    (0x021B, "AC Copy"),
    (0x021C, "AC Cut"),
    (0x021D, "AC Paste"),
    (0x021E, "AC Select All"),
    (0x021F, "AC Find"),
    (0x0220, "AC Find and Replace"),
    (0x0221, "AC Search"),
    (0x0222, "AC Go To"),
    (0x0223, "AC Home"),
    (0x0224, "AC Back"),
    (0x0225, "AC Forward"),
    (0x0226, "AC Stop"),
    (0x0227, "AC Refresh"),
    (0x0228, "AC Previous Link"),
    (0x0229, "AC Next Link"),
    (0x022A, "AC Bookmarks"),
    (0x022B, "AC History"),
    (0x022C, "AC Subscriptions"),
    (0x022D, "AC Zoom In"),
    (0x022E, "AC Zoom Out"),
    (0x022F, "AC Zoom"),
    (0x0230, "AC Full Screen View"),
    (0x0231, "AC Normal View"),
    (0x0232, "AC View Toggle"),
    (0x0233, "AC Scroll Up"),
    (0x0234, "AC Scroll Down"),
    (0x0235, "AC Scroll"),
    (0x0236, "AC Pan Left"),
    (0x0237, "AC Pan Right"),
    (0x0238, "AC Pan"),
    (0x0239, "AC New Window"),
    (0x023A, "AC Tile Horizontally"),
    (0x023B, "AC Tile Vertically"),
    (0x023C, "AC Format"),
    (0x023D, "AC Edit"),
    (0x023E, "AC Bold"),
    (0x023F, "AC Italics"),
    (0x0240, "AC Underline"),
    (0x029D, "AC Keyboard Layout Select"),
    (0x029F, "AC Desktop Show All Windows"),
    (0x02A2, "AC All Applications List"),
];

/// Digitizers Page (0x0D).
static DIGITIZERS: Table = &[
    (0x00, "Undefined"),
    (0x01, "Digitizer"),
    (0x02, "Pen"),
    (0x03, "Light Pen"),
    (0x04, "Touch Screen"),
    (0x05, "Touch Pad"),
    (0x06, "Whiteboard"),
    (0x07, "Coordinate Measuring Machine"),
    (0x08, "3D Digitizer"),
    (0x09, "Stereo Plotter"),
    (0x0A, "Articulated Arm"),
    (0x0B, "Armature"),
    (0x0C, "Multiple Point Digitizer"),
    (0x0D, "Free Space Wand"),
    (0x0E, "Device Configuration"),
    (0x0F, "Capacitive Heat Map Digitizer"),
    (0x20, "Stylus"),
    (0x21, "Puck"),
    (0x22, "Finger"),
    (0x23, "Device Settings"),
    (0x24, "Character Gesture"),
    (0x30, "Tip Pressure"),
    (0x31, "Barrel Pressure"),
    (0x32, "In Range"),
    (0x33, "Touch"),
    (0x34, "Untouch"),
    (0x35, "Tap"),
    (0x36, "Quality"),
    (0x37, "Data Valid"),
    (0x38, "Transducer Index"),
    (0x39, "Tablet Function Keys"),
    (0x3A, "Program Change Keys"),
    (0x3B, "Battery Strength"),
    (0x3C, "Invert"),
    (0x3D, "X Tilt"),
    (0x3E, "Y Tilt"),
    (0x3F, "Azimuth"),
    (0x40, "Altitude"),
    (0x41, "Twist"),
    (0x42, "Tip Switch"),
    (0x43, "Secondary Tip Switch"),
    (0x44, "Barrel Switch"),
    (0x45, "Eraser"),
    (0x46, "Tablet Pick"),
    (0x47, "Touch Valid"),
    (0x48, "Width"),
    (0x49, "Height"),
    (0x51, "Contact Identifier"),
    (0x52, "Device Mode"),
    (0x53, "Device Identifier"),
    (0x54, "Contact Count"),
    (0x55, "Contact Count Maximum"),
    (0x56, "Scan Time"),
    (0x57, "Surface Switch"),
    (0x58, "Button Switch"),
    (0x59, "Pad Type"),
    (0x5A, "Secondary Barrel Switch"),
    (0x5B, "Transducer Serial Number"),
    (0x5C, "Preferred Color"),
    (0x5D, "Preferred Color is Locked"),
    (0x5E, "Preferred Line Width"),
    (0x5F, "Preferred Line Width is Locked"),
    (0x60, "Latency Mode"),
    (0x61, "Gesture Character Quality"),
    (0x62, "Character Gesture Data Length"),
    (0x63, "Character Gesture Data"),
    (0x64, "Gesture Character Encoding"),
    (0x65, "UTF8 Character Gesture Encoding"),
    (0x66, "UTF16 Little Endian Character Gesture Encoding"),
    (0x67, "UTF16 Big Endian Character Gesture Encoding"),
    (0x68, "UTF32 Little Endian Character Gesture Encoding"),
    (0x69, "UTF32 Big Endian Character Gesture Encoding"),
    (0x6A, "Capacitive Heat Map Protocol Vendor ID"),
    (0x6B, "Capacitive Heat Map Protocol Version"),
    (0x6C, "Capacitive Heat Map Frame Data"),
    (0x6D, "Gesture Character Enable"),
    (0x6E, "Transducer Serial Number Part 2"),
    (0x6F, "No Preferred Color"),
    (0x70, "Preferred Line Style"),
    (0x71, "Preferred Line Style is Locked"),
    (0x72, "Ink"),
    (0x73, "Pencil"),
    (0x74, "Highlighter"),
    (0x75, "Chisel Marker"),
    (0x76, "Brush"),
    (0x77, "No Preference"),
    (0x80, "Digitizer Diagnostic"),
    (0x81, "Digitizer Error"),
    (0x82, "Err Normal Status"),
    (0x83, "Err Transducers Exceeded"),
    (0x84, "Err Full Trans Features Unavailable"),
    (0x85, "Err Charge Low"),
    (0x90, "Transducer Software Info"),
    (0x91, "Transducer Vendor Id"),
    (0x92, "Transducer Product Id"),
    (0x93, "Device Supported Protocols"),
    (0x94, "Transducer Supported Protocols"),
    (0x95, "No Protocol"),
    (0x96, "Wacom AES Protocol"),
    (0x97, "USI Protocol"),
    (0x98, "Microsoft Pen Protocol"),
    (0xA0, "Supported Report Rates"),
    (0xA1, "Report Rate"),
    (0xA2, "Transducer Connected"),
    (0xA3, "Switch Disabled"),
    (0xA4, "Switch Unimplemented"),
    (0xA5, "Transducer Switches"),
];

/// Haptics Page (0x0E).
static HAPTICS: Table = &[
    (0x0000, "Undefined"),
    (0x0001, "Simple Haptic Controller"),
    (0x0010, "Waveform List"),
    (0x0011, "Duration List"),
    (0x0020, "Auto Trigger"),
    (0x0021, "Manual Trigger"),
    (0x0022, "Auto Trigger Associated Control"),
    (0x0023, "Intensity"),
    (0x0024, "Repeat Count"),
    (0x0025, "Retrigger Period"),
    (0x0026, "Waveform Vendor Page"),
    (0x0027, "Waveform Vendor ID"),
    (0x0028, "Waveform Cutoff Time"),
    (0x1001, "Waveform None"),
    (0x1002, "Waveform Stop"),
    (0x1003, "Waveform Click"),
    (0x1004, "Waveform Buzz Continuous"),
    (0x1005, "Waveform Rumble Continuous"),
    (0x1006, "Waveform Press"),
    (0x1007, "Waveform Release"),
    (0x1008, "Waveform Hover"),
    (0x1009, "Waveform Success"),
    (0x100A, "Waveform Error"),
    (0x100B, "Waveform Ink Continuous"),
    (0x100C, "Waveform Pencil Continuous"),
    (0x100D, "Waveform Marker Continuous"),
    (0x100E, "Waveform Chisel Marker Continuous"),
    (0x100F, "Waveform Brush Continuous"),
    (0x1010, "Waveform Eraser Continuous"),
    (0x1011, "Waveform Sparkle Continuous"),
];

/// Physical Input Device Page (0x0F).
static PHYSICAL_INPUT: Table = &[
    (0x00, "Undefined"),
    (0x01, "Physical Input Device"),
    (0x20, "Normal"),
    (0x21, "Set Effect Report"),
    (0x22, "Effect Parameter Block Index"),
    (0x23, "Parameter Block Offset"),
    (0x24, "ROM Flag"),
    (0x25, "Effect Type"),
    (0x26, "ET Constant-Force"),
    (0x27, "ET Ramp"),
    (0x28, "ET Custom-Force"),
    (0x30, "ET Square"),
    (0x31, "ET Sine"),
    (0x32, "ET Triangle"),
    (0x33, "ET Sawtooth Up"),
    (0x34, "ET Sawtooth Down"),
    (0x40, "ET Spring"),
    (0x41, "ET Damper"),
    (0x42, "ET Inertia"),
    (0x43, "ET Friction"),
    (0x50, "Duration"),
    (0x51, "Sample Period"),
    (0x52, "Gain"),
    (0x53, "Trigger Button"),
    (0x54, "Trigger Repeat Interval"),
    (0x55, "Axes Enable"),
    (0x56, "Direction Enable"),
    (0x57, "Direction"),
    (0x58, "Type Specific Block Offset"),
    (0x59, "Block Type"),
    (0x5A, "Set Envelope Report"),
    (0x5B, "Attack Level"),
    (0x5C, "Attack Time"),
    (0x5D, "Fade Level"),
    (0x5E, "Fade Time"),
    (0x5F, "Set Condition Report"),
    (0x60, "Center-Point Offset"),
    (0x61, "Positive Coefficient"),
    (0x62, "Negative Coefficient"),
    (0x63, "Positive Saturation"),
    (0x64, "Negative Saturation"),
    (0x65, "Dead Band"),
    (0x66, "Download Force Sample"),
    (0x67, "Isoch Custom-Force Enable"),
    (0x68, "Custom-Force Data Report"),
    (0x69, "Custom-Force Data"),
    (0x6A, "Custom-Force Vendor Defined Data"),
    (0x6B, "Set Custom-Force Report"),
    (0x6C, "Custom-Force Data Offset"),
    (0x6D, "Sample Count"),
    (0x6E, "Set Periodic Report"),
    (0x6F, "Offset"),
    (0x70, "Magnitude"),
    (0x71, "Phase"),
    (0x72, "Period"),
    (0x73, "Set Constant-Force Report"),
    (0x74, "Set Ramp-Force Report"),
    (0x75, "Ramp Start"),
    (0x76, "Ramp End"),
    (0x77, "Effect Operation Report"),
    (0x78, "Effect Operation"),
    (0x79, "Op Effect Start"),
    (0x7A, "Op Effect Start Solo"),
    (0x7B, "Op Effect Stop"),
    (0x7C, "Loop Count"),
    (0x7D, "Device Gain Report"),
    (0x7E, "Device Gain"),
    (0x7F, "Parameter Block Pools Report"),
    (0x80, "RAM Pool Size"),
    (0x81, "ROM Pool Size"),
    (0x82, "ROM Effect Block Count"),
    (0x83, "Simultaneous Effects Max"),
    (0x84, "Pool Alignment"),
    (0x85, "Parameter Block Move Report"),
    (0x86, "Move Source"),
    (0x87, "Move Destination"),
    (0x88, "Move Length"),
    (0x89, "Effect Parameter Block Load Report"),
    (0x8B, "Effect Parameter Block Load Status"),
    (0x8C, "Block Load Success"),
    (0x8D, "Block Load Full"),
    (0x8E, "Block Load Error"),
    (0x8F, "Block Handle"),
    (0x90, "Effect Parameter Block Free Report"),
    (0x91, "Type Specific Block Handle"),
    (0x92, "PID State Report"),
    (0x94, "Effect Playing"),
    (0x95, "PID Device Control Report"),
    (0x96, "PID Device Control"),
    (0x97, "DC Enable Actuators"),
    (0x98, "DC Disable Actuators"),
    (0x99, "DC Stop All Effects"),
    (0x9A, "DC Reset"),
    (0x9B, "DC Pause"),
    (0x9C, "DC Continue"),
    (0x9F, "Device Paused"),
    (0xA0, "Actuators Enabled"),
    (0xA4, "Safety Switch"),
    (0xA5, "Actuator Override Switch"),
    (0xA6, "Actuator Power"),
    (0xA7, "Start Delay"),
    (0xA8, "Parameter Block Size"),
    (0xA9, "Device-Managed Pool"),
    (0xAA, "Shared Parameter Blocks"),
    (0xAB, "Create New Effect Parameter Block Report"),
    (0xAC, "RAM Pool Available"),
];

/// SoC Page (0x11).
static SOC: Table = &[
    (0x00, "Undefined"),
    (0x01, "SocControl"),
    (0x02, "FirmwareTransfer"),
    (0x03, "FirmwareFileId"),
    (0x04, "FileOffsetInBytes"),
    (0x05, "FileTransferSizeMaxInBytes"),
    (0x06, "FilePayload"),
    (0x07, "FilePayloadSizeInBytes"),
    (0x08, "FilePayloadContainsLastBytes"),
    (0x09, "FileTransferStop"),
    (0x0A, "FileTransferTillEnd"),
];

/// Eye and Head Trackers Page (0x12).
static EYE_HEAD_TRACKERS: Table = &[
    (0x0000, "Undefined"),
    (0x0001, "Eye Tracker"),
    (0x0002, "Head Tracker"),
    (0x0010, "Tracking Data"),
    (0x0011, "Capabilities"),
    (0x0012, "Configuration"),
    (0x0013, "Status"),
    (0x0014, "Control"),
    (0x0020, "Sensor Timestamp"),
    (0x0021, "Position X"),
    (0x0022, "Position Y"),
    (0x0023, "Position Z"),
    (0x0024, "Gaze Point"),
    (0x0025, "Left Eye Position"),
    (0x0026, "Right Eye Position"),
    (0x0027, "Head Position"),
    (0x0028, "Head Direction Point"),
    (0x0029, "Rotation about X axis"),
    (0x002A, "Rotation about Y axis"),
    (0x002B, "Rotation about Z axis"),
    (0x0100, "Tracker Quality"),
    (0x0101, "Minimum Tracking Distance"),
    (0x0102, "Optimum Tracking Distance"),
    (0x0103, "Maximum Tracking Distance"),
    (0x0104, "Maximum Screen Plane Width"),
    (0x0105, "Maximum Screen Plane Height"),
    (0x0200, "Display Manufacturer ID"),
    (0x0201, "Display Product ID"),
    (0x0202, "Display Serial Number"),
    (0x0203, "Display Manufacturer Date"),
    (0x0204, "Calibrated Screen Width"),
    (0x0205, "Calibrated Screen Height"),
    (0x0300, "Sampling Frequency"),
    (0x0301, "Configuration Status"),
    (0x0400, "Device Mode Request"),
];

/// Auxiliary Display Page (0x14).
static AUX_DISPLAY: Table = &[
    (0x00, "Undefined"),
    (0x01, "Alphanumeric Display"),
    (0x02, "Auxiliary Display"),
    (0x20, "Display Attributes Report"),
    (0x21, "ASCII Character Set"),
    (0x22, "Data Read Back"),
    (0x23, "Font Read Back"),
    (0x24, "Display Control Report"),
    (0x25, "Clear Display"),
    (0x26, "Display Enable"),
    (0x27, "Screen Saver Delay"),
    (0x28, "Screen Saver Enable"),
    (0x29, "Vertical Scroll"),
    (0x2A, "Horizontal Scroll"),
    (0x2B, "Character Report"),
    (0x2C, "Display Data"),
    (0x2D, "Display Status"),
    (0x2E, "Stat Not Ready"),
    (0x2F, "Stat Ready"),
    (0x30, "Err Not a loadable character"),
    (0x31, "Err Font data cannot be read"),
    (0x32, "Cursor Position Report"),
    (0x33, "Row"),
    (0x34, "Column"),
    (0x35, "Rows"),
    (0x36, "Columns"),
    (0x37, "Cursor Pixel Positioning"),
    (0x38, "Cursor Mode"),
    (0x39, "Cursor Enable"),
    (0x3A, "Cursor Blink"),
    (0x3B, "Font Report"),
    (0x3C, "Font Data"),
    (0x3D, "Character Width"),
    (0x3E, "Character Height"),
    (0x3F, "Character Spacing Horizontal"),
    (0x40, "Character Spacing Vertical"),
    (0x41, "Unicode Character Set"),
    (0x42, "Font 7-Segment"),
    (0x43, "7-Segment Direct Map"),
    (0x44, "Font 14-Segment"),
    (0x45, "14-Segment Direct Map"),
    (0x46, "Display Brightness"),
    (0x47, "Display Contrast"),
    (0x48, "Character Attribute"),
    (0x49, "Attribute Readback"),
    (0x4A, "Attribute Data"),
    (0x4B, "Char Attr Enhance"),
    (0x4C, "Char Attr Underline"),
    (0x4D, "Char Attr Blink"),
    (0x80, "Bitmap Size X"),
    (0x81, "Bitmap Size Y"),
    (0x82, "Max Blit Size"),
    (0x83, "Bit Depth Format"),
    (0x84, "Display Orientation"),
    (0x85, "Palette Report"),
    (0x86, "Palette Data Size"),
    (0x87, "Palette Data Offset"),
    (0x88, "Palette Data"),
    (0x8A, "Blit Report"),
    (0x8B, "Blit Rectangle X1"),
    (0x8C, "Blit Rectangle Y1"),
    (0x8D, "Blit Rectangle X2"),
    (0x8E, "Blit Rectangle Y2"),
    (0x8F, "Blit Data"),
    (0x90, "Soft Button"),
    (0x91, "Soft Button ID"),
    (0x92, "Soft Button Side"),
    (0x93, "Soft Button Offset 1"),
    (0x94, "Soft Button Offset 2"),
    (0x95, "Soft Button Report"),
    (0xC2, "Soft Keys"),
    (0xCC, "Display Data Extensions"),
    (0xCF, "Character Mapping"),
    (0xDD, "Unicode Equivalent"),
    (0xDF, "Character Page Mapping"),
    (0xFF, "Request Report"),
];

/// Sensors Page (0x20).
static SENSORS: Table = &[
    (0x0000, "Undefined"),
    (0x0001, "Sensor"),
    (0x0010, "Biometric"),
    (0x0011, "Biometric: Human Presence"),
    (0x0012, "Biometric: Human Proximity"),
    (0x0013, "Biometric: Human Touch"),
    (0x0014, "Biometric: Blood Pressure"),
    (0x0015, "Biometric: Body Temperature"),
    (0x0016, "Biometric: Heart Rate"),
    (0x0017, "Biometric: Heart Rate Variability"),
    (0x0018, "Biometric: Peripheral Oxygen Saturation"),
    (0x0019, "Biometric: Respiratory Rate"),
    (0x0020, "Electrical"),
    (0x0021, "Electrical: Capacitance"),
    (0x0022, "Electrical: Current"),
    (0x0023, "Electrical: Power"),
    (0x0024, "Electrical: Inductance"),
    (0x0025, "Electrical: Resistance"),
    (0x0026, "Electrical: Voltage"),
    (0x0027, "Electrical: Potentiometer"),
    (0x0028, "Electrical: Frequency"),
    (0x0029, "Electrical: Period"),
    (0x0030, "Environmental"),
    (0x0031, "Environmental: Atmospheric Pressure"),
    (0x0032, "Environmental: Humidity"),
    (0x0033, "Environmental: Temperature"),
    (0x0034, "Environmental: Wind Direction"),
    (0x0035, "Environmental: Wind Speed"),
    (0x0036, "Environmental: Air Quality"),
    (0x0037, "Environmental: Heat Index"),
    (0x0038, "Environmental: Surface Temperature"),
    (0x0039, "Environmental: Volatile Organic Compounds"),
    (0x003A, "Environmental: Object Presence"),
    (0x003B, "Environmental: Object Proximity"),
    (0x0040, "Light"),
    (0x0041, "Light: Ambient Light"),
    (0x0042, "Light: Consumer Infrared"),
    (0x0043, "Light: Infrared Light"),
    (0x0044, "Light: Visible Light"),
    (0x0045, "Light: Ultraviolet Light"),
    (0x0050, "Location"),
    (0x0051, "Location: Broadcast"),
    (0x0052, "Location: Dead Reckoning"),
    (0x0053, "Location: GPS (Global Positioning System)"),
    (0x0054, "Location: Lookup"),
    (0x0055, "Location: Other"),
    (0x0056, "Location: Static"),
    (0x0057, "Location: Triangulation"),
    (0x0060, "Mechanical"),
    (0x0061, "Mechanical: Boolean Switch"),
    (0x0062, "Mechanical: Boolean Switch Array"),
    (0x0063, "Mechanical: Multivalue Switch"),
    (0x0064, "Mechanical: Force"),
    (0x0065, "Mechanical: Pressure"),
    (0x0066, "Mechanical: Strain"),
    (0x0067, "Mechanical: Weight"),
    (0x0068, "Mechanical: Haptic Vibrator"),
    (0x0069, "Mechanical: Hall Effect Switch"),
    (0x0070, "Motion"),
    (0x0071, "Motion: Accelerometer 1D"),
    (0x0072, "Motion: Accelerometer 2D"),
    (0x0073, "Motion: Accelerometer 3D"),
    (0x0074, "Motion: Gyrometer 1D"),
    (0x0075, "Motion: Gyrometer 2D"),
    (0x0076, "Motion: Gyrometer 3D"),
    (0x0077, "Motion: Motion Detector"),
    (0x0078, "Motion: Speedometer"),
    (0x0079, "Motion: Accelerometer"),
    (0x007A, "Motion: Gyrometer"),
    (0x007B, "Motion: Gravity Vector"),
    (0x007C, "Motion: Linear Accelerometer"),
    (0x0080, "Orientation"),
    (0x0081, "Orientation: Compass 1D"),
    (0x0082, "Orientation: Compass 2D"),
    (0x0083, "Orientation: Compass 3D"),
    (0x0084, "Orientation: Inclinometer 1D"),
    (0x0085, "Orientation: Inclinometer 2D"),
    (0x0086, "Orientation: Inclinometer 3D"),
    (0x0087, "Orientation: Distance 1D"),
    (0x0088, "Orientation: Distance 2D"),
    (0x0089, "Orientation: Distance 3D"),
    (0x008A, "Orientation: Device Orientation"),
    (0x008B, "Orientation: Compass"),
    (0x008C, "Orientation: Inclinometer"),
    (0x008D, "Orientation: Distance"),
    (0x008E, "Orientation: Relative Orientation"),
    (0x008F, "Orientation: Simple Orientation"),
    (0x0090, "Scanner"),
    (0x0091, "Scanner: Barcode"),
    (0x0092, "Scanner: RFID"),
    (0x0093, "Scanner: NFC"),
    (0x00A0, "Time"),
    (0x00A1, "Time: Alarm Timer"),
    (0x00A2, "Time: Real Time Clock"),
    (0x00B0, "Personal Activity"),
    (0x00B1, "Personal Activity: Activity Detection"),
    (0x00B2, "Personal Activity: Device Position"),
    (0x00B3, "Personal Activity: Floor Tracker"),
    (0x00B4, "Personal Activity: Pedometer"),
    (0x00B5, "Personal Activity: Step Detection"),
    (0x00C0, "Orientation Extended"),
    (0x00C1, "Orientation Extended: Geomagnetic Orientation"),
    (0x00C2, "Orientation Extended: Magnetometer"),
    (0x00D0, "Gesture"),
    (0x00D1, "Gesture: Chassis Flip Gesture"),
    (0x00D2, "Gesture: Hinge Fold Gesture"),
    (0x00E0, "Other"),
    (0x00E1, "Other: Custom"),
    (0x00E2, "Other: Generic"),
    (0x00E3, "Other: Generic Enumerator"),
    (0x00E4, "Other: Hinge Angle"),
    (0x0200, "Event"),
    (0x0201, "Event: Sensor State"),
    (0x0202, "Event: Sensor Event"),
    (0x0300, "Property"),
    (0x0301, "Property: Friendly Name"),
    (0x0302, "Property: Persistent Unique ID"),
    (0x0303, "Property: Sensor Status"),
    (0x0304, "Property: Minimum Report Interval"),
    (0x0305, "Property: Sensor Manufacturer"),
    (0x0306, "Property: Sensor Model"),
    (0x0307, "Property: Sensor Serial Number"),
    (0x0308, "Property: Sensor Description"),
    (0x0309, "Property: Sensor Connection Type"),
    (0x030A, "Property: Sensor Device Path"),
    (0x030B, "Property: Hardware Revision"),
    (0x030C, "Property: Firmware Version"),
    (0x030D, "Property: Release Date"),
    (0x030E, "Property: Report Interval"),
    (0x030F, "Property: Change Sensitivity Absolute"),
    (0x0310, "Property: Change Sensitivity Percent of Range"),
    (0x0311, "Property: Change Sensitivity Percent Relative"),
    (0x0312, "Property: Accuracy"),
    (0x0313, "Property: Resolution"),
    (0x0314, "Property: Maximum"),
    (0x0315, "Property: Minimum"),
    (0x0316, "Property: Reporting State"),
    (0x0317, "Property: Sampling Rate"),
    (0x0318, "Property: Response Curve"),
    (0x0319, "Property: Power State"),
];

/// Medical Instrument Page (0x40).
static MEDICAL: Table = &[
    (0x00, "Undefined"),
    (0x01, "Medical Ultrasound"),
    (0x20, "VCR/Acquisition"),
    (0x21, "Freeze/Thaw"),
    (0x22, "Clip Store"),
    (0x23, "Update"),
    (0x24, "Next"),
    (0x25, "Save"),
    (0x26, "Print"),
    (0x27, "Microphone Enable"),
    (0x40, "Cine"),
    (0x41, "Transmit Power"),
    (0x42, "Volume"),
    (0x43, "Focus"),
    (0x44, "Depth"),
    (0x60, "Soft Step - Primary"),
    (0x61, "Soft Step - Secondary"),
    (0x70, "Depth Gain Compensation"),
    (0x80, "Zoom Select"),
    (0x81, "Zoom Adjust"),
    (0x82, "Spectral Doppler Mode Select"),
    (0x83, "Spectral Doppler Adjust"),
    (0x84, "Color Doppler Mode Select"),
    (0x85, "Color Doppler Adjust"),
    (0x86, "Motion Mode Select"),
    (0x87, "Motion Mode Adjust"),
    (0x88, "2-D Mode Select"),
    (0x89, "2-D Mode Adjust"),
    (0xA0, "Soft Control Select"),
    (0xA1, "Soft Control Adjust"),
];

/// Braille Display Page (0x41).
static BRAILLE: Table = &[
    (0x0000, "Undefined"),
    (0x0001, "Braille Display"),
    (0x0002, "Braille Row"),
    (0x0003, "8 Dot Braille Cell"),
    (0x0004, "6 Dot Braille Cell"),
    (0x0005, "Number of Braille Cells"),
    (0x0006, "Screen Reader Control"),
    (0x0007, "Screen Reader Identifier"),
    (0x00FA, "Router Set 1"),
    (0x00FB, "Router Set 2"),
    (0x00FC, "Router Set 3"),
    (0x0100, "Router Key"),
    (0x0101, "Row Router Key"),
    (0x0200, "Braille Buttons"),
    (0x0201, "Braille Keyboard Dot 1"),
    (0x0202, "Braille Keyboard Dot 2"),
    (0x0203, "Braille Keyboard Dot 3"),
    (0x0204, "Braille Keyboard Dot 4"),
    (0x0205, "Braille Keyboard Dot 5"),
    (0x0206, "Braille Keyboard Dot 6"),
    (0x0207, "Braille Keyboard Dot 7"),
    (0x0208, "Braille Keyboard Dot 8"),
    (0x0209, "Braille Keyboard Space"),
    (0x020A, "Braille Keyboard Left Space"),
    (0x020B, "Braille Keyboard Right Space"),
    (0x020C, "Braille Face Controls"),
    (0x020D, "Braille Left Controls"),
    (0x020E, "Braille Right Controls"),
    (0x020F, "Braille Top Controls"),
    (0x0210, "Braille Joystick Center"),
    (0x0211, "Braille Joystick Up"),
    (0x0212, "Braille Joystick Down"),
    (0x0213, "Braille Joystick Left"),
    (0x0214, "Braille Joystick Right"),
    (0x0215, "Braille D-Pad Center"),
    (0x0216, "Braille D-Pad Up"),
    (0x0217, "Braille D-Pad Down"),
    (0x0218, "Braille D-Pad Left"),
    (0x0219, "Braille D-Pad Right"),
    (0x021A, "Braille Pan Left"),
    (0x021B, "Braille Pan Right"),
    (0x021C, "Braille Rocker Up"),
    (0x021D, "Braille Rocker Down"),
    (0x021E, "Braille Rocker Press"),
];

/// Lighting And Illumination Page (0x59).
static LIGHTING: Table = &[
    (0x00, "Undefined"),
    (0x01, "LampArray"),
    (0x02, "LampArrayAttributesReport"),
    (0x03, "LampCount"),
    (0x04, "BoundingBoxWidthInMicrometers"),
    (0x05, "BoundingBoxHeightInMicrometers"),
    (0x06, "BoundingBoxDepthInMicrometers"),
    (0x07, "LampArrayKind"),
    (0x08, "MinUpdateIntervalInMicroseconds"),
    (0x20, "LampAttributesRequestReport"),
    (0x21, "LampId"),
    (0x22, "LampAttributesResponseReport"),
    (0x23, "PositionXInMicrometers"),
    (0x24, "PositionYInMicrometers"),
    (0x25, "PositionZInMicrometers"),
    (0x26, "LampPurposes"),
    (0x27, "UpdateLatencyInMicroseconds"),
    (0x28, "RedLevelCount"),
    (0x29, "GreenLevelCount"),
    (0x2A, "BlueLevelCount"),
    (0x2B, "IntensityLevelCount"),
    (0x2C, "IsProgrammable"),
    (0x2D, "InputBinding"),
    (0x50, "LampMultiUpdateReport"),
    (0x51, "RedUpdateChannel"),
    (0x52, "GreenUpdateChannel"),
    (0x53, "BlueUpdateChannel"),
    (0x54, "IntensityUpdateChannel"),
    (0x55, "LampUpdateFlags"),
    (0x60, "LampRangeUpdateReport"),
    (0x61, "LampIdStart"),
    (0x62, "LampIdEnd"),
    (0x70, "LampArrayControlReport"),
    (0x71, "AutonomousMode"),
];

/// Monitor Page (0x80).
static MONITOR: Table = &[
    (0x00, "Undefined"),
    (0x01, "Monitor Control"),
    (0x02, "EDID Information"),
    (0x03, "VDIF Information"),
    (0x04, "VESA Version"),
];

/// VESA Virtual Controls Page (0x82).
static VESA: Table = &[
    (0x00, "Undefined"),
    (0x01, "Degauss"),
    (0x10, "Brightness"),
    (0x12, "Contrast"),
    (0x16, "Red Video Gain"),
    (0x18, "Green Video Gain"),
    (0x1A, "Blue Video Gain"),
    (0x1C, "Focus"),
    (0x20, "Horizontal Position"),
    (0x22, "Horizontal Size"),
    (0x24, "Horizontal Pincushion"),
    (0x26, "Horizontal Pincushion Balance"),
    (0x28, "Horizontal Misconvergence"),
    (0x2A, "Horizontal Linearity"),
    (0x2C, "Horizontal Linearity Balance"),
    (0x30, "Vertical Position"),
    (0x32, "Vertical Size"),
    (0x34, "Vertical Pincushion"),
    (0x36, "Vertical Pincushion Balance"),
    (0x38, "Vertical Misconvergence"),
    (0x3A, "Vertical Linearity"),
    (0x3C, "Vertical Linearity Balance"),
    (0x40, "Parallelogram Distortion (Key Balance)"),
    (0x42, "Trapezoidal Distortion (Key)"),
    (0x44, "Tilt (Rotation)"),
    (0x46, "Top Corner Distortion Control"),
    (0x48, "Top Corner Distortion Balance"),
    (0x4A, "Bottom Corner Distortion Control"),
    (0x4C, "Bottom Corner Distortion Balance"),
    (0x56, "Horizontal Moire"),
    (0x58, "Vertical Moire"),
    (0x5E, "Input Level Select"),
    (0x60, "Input Source Select"),
    (0x6C, "Red Video Black Level"),
    (0x6E, "Green Video Black Level"),
    (0x70, "Blue Video Black Level"),
    (0xA2, "Auto Size Center"),
    (0xA4, "Polarity Horizontal Synchronization"),
    (0xA6, "Polarity Vertical Synchronization"),
    (0xA8, "Synchronization Type"),
    (0xAA, "Screen Orientation"),
    (0xAC, "Horizontal Frequency"),
    (0xAE, "Vertical Frequency"),
    (0xB0, "Settings"),
    (0xCA, "On Screen Display"),
    (0xD4, "Stereo Mode"),
];

/// Power Page (0x84).
static POWER: Table = &[
    (0x00, "Undefined"),
    (0x01, "iName"),
    (0x02, "Present Status"),
    (0x03, "Changed Status"),
    (0x04, "UPS"),
    (0x05, "Power Supply"),
    (0x10, "Battery System"),
    (0x11, "Battery System Id"),
    (0x12, "Battery"),
    (0x13, "Battery Id"),
    (0x14, "Charger"),
    (0x15, "Charger Id"),
    (0x16, "Power Converter"),
    (0x17, "Power Converter Id"),
    (0x18, "Outlet System"),
    (0x19, "Outlet System Id"),
    (0x1A, "Input"),
    (0x1B, "Input Id"),
    (0x1C, "Output"),
    (0x1D, "Output Id"),
    (0x1E, "Flow"),
    (0x1F, "Flow Id"),
    (0x20, "Outlet"),
    (0x21, "Outlet Id"),
    (0x22, "Gang"),
    (0x23, "Gang Id"),
    (0x24, "Power Summary"),
    (0x25, "Power Summary Id"),
    (0x30, "Voltage"),
    (0x31, "Current"),
    (0x32, "Frequency"),
    (0x33, "Apparent Power"),
    (0x34, "Active Power"),
    (0x35, "Percent Load"),
    (0x36, "Temperature"),
    (0x37, "Humidity"),
    (0x38, "Bad Count"),
    (0x40, "Config Voltage"),
    (0x41, "Config Current"),
    (0x42, "Config Frequency"),
    (0x43, "Config Apparent Power"),
    (0x44, "Config Active Power"),
    (0x45, "Config Percent Load"),
    (0x46, "Config Temperature"),
    (0x47, "Config Humidity"),
    (0x50, "Switch On Control"),
    (0x51, "Switch Off Control"),
    (0x52, "Toggle Control"),
    (0x53, "Low Voltage Transfer"),
    (0x54, "High Voltage Transfer"),
    (0x55, "Delay Before Reboot"),
    (0x56, "Delay Before Startup"),
    (0x57, "Delay Before Shutdown"),
    (0x58, "Test"),
    (0x59, "Module Reset"),
    (0x5A, "Audible Alarm Control"),
    (0x60, "Present"),
    (0x61, "Good"),
    (0x62, "Internal Failure"),
    (0x63, "Voltage Out Of Range"),
    (0x64, "Frequency Out Of Range"),
    (0x65, "Overload"),
    (0x66, "Over Charged"),
    (0x67, "Over Temperature"),
    (0x68, "Shutdown Requested"),
    (0x69, "Shutdown Imminent"),
    (0x6B, "Switch On/Off"),
    (0x6C, "Switchable"),
    (0x6D, "Used"),
    (0x6E, "Boost"),
    (0x6F, "Buck"),
    (0x70, "Initialized"),
    (0x71, "Tested"),
    (0x72, "Awaiting Power"),
    (0x73, "Communication Lost"),
    (0xFD, "iManufacturer"),
    (0xFE, "iProduct"),
    (0xFF, "iSerialNumber"),
];

/// Battery System Page (0x85).
static BATTERY: Table = &[
    (0x00, "Undefined"),
    (0x01, "Smart Battery Battery Mode"),
    (0x02, "Smart Battery Battery Status"),
    (0x03, "Smart Battery Alarm Warning"),
    (0x04, "Smart Battery Charger Mode"),
    (0x05, "Smart Battery Charger Status"),
    (0x06, "Smart Battery Charger Spec Info"),
    (0x07, "Smart Battery Selector State"),
    (0x08, "Smart Battery Selector Presets"),
    (0x09, "Smart Battery Selector Info"),
    (0x10, "Optional Mfg Function 1"),
    (0x11, "Optional Mfg Function 2"),
    (0x12, "Optional Mfg Function 3"),
    (0x13, "Optional Mfg Function 4"),
    (0x14, "Optional Mfg Function 5"),
    (0x15, "Connection To SM Bus"),
    (0x16, "Output Connection"),
    (0x17, "Charger Connection"),
    (0x18, "Battery Insertion"),
    (0x19, "Use Next"),
    (0x1A, "OK To Use"),
    (0x1B, "Battery Supported"),
    (0x1C, "Selector Revision"),
    (0x1D, "Charging Indicator"),
    (0x28, "Manufacturer Access"),
    (0x29, "Remaining Capacity Limit"),
    (0x2A, "Remaining Time Limit"),
    (0x2B, "At Rate"),
    (0x2C, "Capacity Mode"),
    (0x2D, "Broadcast To Charger"),
    (0x2E, "Primary Battery"),
    (0x2F, "Charge Controller"),
    (0x40, "Terminate Charge"),
    (0x41, "Terminate Discharge"),
    (0x42, "Below Remaining Capacity Limit"),
    (0x43, "Remaining Time Limit Expired"),
    (0x44, "Charging"),
    (0x45, "Discharging"),
    (0x46, "Fully Charged"),
    (0x47, "Fully Discharged"),
    (0x48, "Conditioning Flag"),
    (0x49, "At Rate OK"),
    (0x4A, "Smart Battery Error Code"),
    (0x4B, "Need Replacement"),
    (0x60, "At Rate Time To Full"),
    (0x61, "At Rate Time To Empty"),
    (0x62, "Average Current"),
    (0x63, "Max Error"),
    (0x64, "Relative State Of Charge"),
    (0x65, "Absolute State Of Charge"),
    (0x66, "Remaining Capacity"),
    (0x67, "Full Charge Capacity"),
    (0x68, "Run Time To Empty"),
    (0x69, "Average Time To Empty"),
    (0x6A, "Average Time To Full"),
    (0x6B, "Cycle Count"),
    (0x80, "Battery Pack Model Level"),
    (0x81, "Internal Charge Controller"),
    (0x82, "Primary Battery Support"),
    (0x83, "Design Capacity"),
    (0x84, "Specification Info"),
    (0x85, "Manufacture Date"),
    (0x86, "Serial Number"),
    (0x87, "iManufacturer Name"),
    (0x88, "iDevice Name"),
    (0x89, "iDevice Chemistry"),
    (0x8A, "Manufacturer Data"),
    (0x8B, "Rechargable"),
    (0x8C, "Warning Capacity Limit"),
    (0x8D, "Capacity Granularity 1"),
    (0x8E, "Capacity Granularity 2"),
    (0x8F, "iOEM Information"),
    (0xC0, "Inhibit Charge"),
    (0xC1, "Enable Polling"),
    (0xC2, "Reset To Zero"),
    (0xD0, "AC Present"),
    (0xD1, "Battery Present"),
    (0xD2, "Power Fail"),
    (0xD3, "Alarm Inhibited"),
    (0xD4, "Thermistor Under Range"),
    (0xD5, "Thermistor Hot"),
    (0xD6, "Thermistor Cold"),
    (0xD7, "Thermistor Over Range"),
    (0xD8, "Voltage Out Of Range"),
    (0xD9, "Current Out Of Range"),
    (0xDA, "Current Not Regulated"),
    (0xDB, "Voltage Not Regulated"),
    (0xDC, "Master Mode"),
    (0xF0, "Charger Selector Support"),
    (0xF1, "Charger Spec"),
    (0xF2, "Level 2"),
    (0xF3, "Level 3"),
];

/// Barcode Scanner Page (0x8C).
static BARCODE: Table = &[
    (0x00, "Undefined"),
    (0x01, "Barcode Badge Reader"),
    (0x02, "Barcode Scanner"),
    (0x03, "Dumb Bar Code Scanner"),
    (0x04, "Cordless Scanner Base"),
    (0x05, "Bar Code Scanner Cradle"),
    (0x10, "Attribute Report"),
    (0x11, "Settings Report"),
    (0x12, "Scanned Data Report"),
    (0x13, "Raw Scanned Data Report"),
    (0x14, "Trigger Report"),
    (0x15, "Status Report"),
    (0x16, "UPC/EAN Control Report"),
    (0x17, "EAN 2/3 Label Control Report"),
    (0x18, "Code 39 Control Report"),
    (0x19, "Interleaved 2 of 5 Control Report"),
    (0x1A, "Standard 2 of 5 Control Report"),
    (0x1B, "MSI Plessey Control Report"),
    (0x1C, "Codabar Control Report"),
    (0x1D, "Code 128 Control Report"),
    (0x1E, "Misc 1D Control Report"),
    (0x1F, "2D Control Report"),
    (0x30, "Aiming/Pointer Mode"),
    (0x31, "Bar Code Present Sensor"),
    (0x32, "Class 1A Laser"),
    (0x33, "Class 2 Laser"),
    (0x34, "Heater Present"),
    (0x35, "Contact Scanner"),
    (0x36, "Electronic Article Surveillance Notification"),
    (0x37, "Constant Electronic Article Surveillance"),
    (0x38, "Error Indication"),
    (0x39, "Fixed Beeper"),
    (0x3A, "Good Decode Indication"),
    (0x3B, "Hands Free Scanning"),
    (0x3C, "Intrinsically Safe"),
    (0x3D, "Klasse Eins Laser"),
    (0x3E, "Long Range Scanner"),
    (0x3F, "Mirror Speed Control"),
    (0x40, "Not On File Indication"),
    (0x41, "Programmable Beeper"),
    (0x42, "Triggerless"),
    (0x43, "Wand"),
    (0x44, "Water Resistant"),
    (0x45, "Multi-Range Scanner"),
    (0x46, "Proximity Sensor"),
    (0x4D, "Fragment Decoding"),
    (0x4E, "Scanner Read Confidence"),
    (0x4F, "Data Prefix"),
    (0x50, "Prefix AIMI"),
    (0x51, "Prefix None"),
    (0x52, "Prefix Proprietary"),
    (0x55, "Active Time"),
    (0x56, "Aiming Laser Pattern"),
    (0x57, "Bar Code Present"),
    (0x58, "Beeper State"),
    (0x59, "Laser On Time"),
    (0x5A, "Laser State"),
    (0x5B, "Lockout Time"),
    (0x5C, "Motor State"),
    (0x5D, "Motor Timeout"),
    (0x5E, "Power On Reset Scanner"),
    (0x5F, "Prevent Read of Barcodes"),
    (0x60, "Initiate Barcode Read"),
    (0x61, "Trigger State"),
    (0x62, "Trigger Mode"),
    (0x63, "Trigger Mode Blinking Laser On"),
    (0x64, "Trigger Mode Continuous Laser On"),
    (0x65, "Trigger Mode Laser on while Pulled"),
    (0x66, "Trigger Mode Laser stays on after release"),
    (0x6D, "Commit Parameters to NVM"),
    (0x6E, "Parameter Scanning"),
    (0x6F, "Parameters Changed"),
    (0x70, "Set parameter default values"),
    (0x75, "Scanner In Cradle"),
    (0x76, "Scanner In Range"),
    (0x7A, "Aim Duration"),
    (0x7B, "Good Read Lamp Duration"),
    (0x7C, "Good Read Lamp Intensity"),
    (0x7D, "Good Read LED"),
    (0x7E, "Good Read Tone Frequency"),
    (0x7F, "Good Read Tone Length"),
    (0x80, "Good Read Tone Volume"),
    (0x82, "No Read Message"),
    (0x83, "Not on File Volume"),
    (0x84, "Powerup Beep"),
    (0x85, "Sound Error Beep"),
    (0x86, "Sound Good Read Beep"),
    (0x87, "Sound Not On File Beep"),
    (0x88, "Good Read When to Write"),
    (0x89, "GRWTI After Decode"),
    (0x8A, "GRWTI Beep/Lamp after transmit"),
    (0x8B, "GRWTI No Beep/Lamp use at all"),
    (0x91, "Bookland EAN"),
    (0x92, "Convert EAN 8 to 13 Type"),
    (0x93, "Convert UPC A to EAN-13"),
    (0x94, "Convert UPC-E to A"),
    (0x95, "EAN-13"),
    (0x96, "EAN-8"),
    (0x97, "EAN-99 128 Mandatory"),
    (0x98, "EAN-99 P5/128 Optional"),
    (0x99, "Enable EAN Two Label"),
    (0x9A, "UPC/EAN"),
    (0x9B, "UPC/EAN Coupon Code"),
    (0x9C, "UPC/EAN Periodicals"),
    (0x9D, "UPC-A"),
    (0x9E, "UPC-A with 128 Mandatory"),
    (0x9F, "UPC-A with 128 Optional"),
    (0xA0, "UPC-A with P5 Optional"),
    (0xA1, "UPC-E"),
    (0xA2, "UPC-E1"),
];

/// Scales Page (0x8D).
static SCALES: Table = &[
    (0x00, "Undefined"),
    (0x01, "Scales"),
    (0x20, "Scale Device"),
    (0x21, "Scale Class"),
    (0x22, "Scale Class I Metric"),
    (0x23, "Scale Class II Metric"),
    (0x24, "Scale Class III Metric"),
    (0x25, "Scale Class IIIL Metric"),
    (0x26, "Scale Class IV Metric"),
    (0x27, "Scale Class III English"),
    (0x28, "Scale Class IIIL English"),
    (0x29, "Scale Class IV English"),
    (0x2A, "Scale Class Generic"),
    (0x30, "Scale Attribute Report"),
    (0x31, "Scale Control Report"),
    (0x32, "Scale Data Report"),
    (0x33, "Scale Status Report"),
    (0x34, "Scale Weight Limit Report"),
    (0x35, "Scale Statistics Report"),
    (0x40, "Data Weight"),
    (0x41, "Data Scaling"),
    (0x50, "Weight Unit"),
    (0x51, "Weight Unit Milligram"),
    (0x52, "Weight Unit Gram"),
    (0x53, "Weight Unit Kilogram"),
    (0x54, "Weight Unit Carats"),
    (0x55, "Weight Unit Taels"),
    (0x56, "Weight Unit Grains"),
    (0x57, "Weight Unit Pennyweights"),
    (0x58, "Weight Unit Metric Ton"),
    (0x59, "Weight Unit Avoir Ton"),
    (0x5A, "Weight Unit Troy Ounce"),
    (0x5B, "Weight Unit Ounce"),
    (0x5C, "Weight Unit Pound"),
    (0x60, "Calibration Count"),
    (0x61, "Re-Zero Count"),
    (0x70, "Scale Status"),
    (0x71, "Scale Status Fault"),
    (0x72, "Scale Status Stable at Center of Zero"),
    (0x73, "Scale Status In Motion"),
    (0x74, "Scale Status Weight Stable"),
    (0x75, "Scale Status Under Zero"),
    (0x76, "Scale Status Over Weight Limit"),
    (0x77, "Scale Status Requires Calibration"),
    (0x78, "Scale Status Requires Rezeroing"),
    (0x80, "Zero Scale"),
    (0x81, "Enforced Zero Return"),
];

/// Magnetic Stripe Reader Page (0x8E).
static MAGNETIC_STRIPE: Table = &[
    (0x00, "Undefined"),
    (0x01, "MSR Device Read-Only"),
    (0x11, "Track 1 Length"),
    (0x12, "Track 2 Length"),
    (0x13, "Track 3 Length"),
    (0x14, "Track JIS Length"),
    (0x20, "Track Data"),
    (0x21, "Track 1 Data"),
    (0x22, "Track 2 Data"),
    (0x23, "Track 3 Data"),
    (0x24, "Track JIS Data"),
];

/// Camera Control Page (0x90).
static CAMERA: Table = &[
    (0x00, "Undefined"),
    (0x20, "Camera Auto-focus"),
    (0x21, "Camera Shutter"),
];

/// Arcade Page (0x91).
static ARCADE: Table = &[
    (0x00, "Undefined"),
    (0x01, "General Purpose IO Card"),
    (0x02, "Coin Door"),
    (0x03, "Watchdog Timer"),
    (0x30, "General Purpose Analog Input State"),
    (0x31, "General Purpose Digital Input State"),
    (0x32, "General Purpose Optical Input State"),
    (0x33, "General Purpose Digital Output State"),
    (0x34, "Number of Coin Doors"),
    (0x35, "Coin Drawer Drop Count"),
    (0x36, "Coin Drawer Start"),
    (0x37, "Coin Drawer Service"),
    (0x38, "Coin Drawer Tilt"),
    (0x39, "Coin Door Test"),
    (0x40, "Coin Door Lockout"),
    (0x41, "Watchdog Timeout"),
    (0x42, "Watchdog Action"),
    (0x43, "Watchdog Reboot"),
    (0x44, "Watchdog Restart"),
    (0x45, "Alarm Input"),
    (0x46, "Coin Door Counter"),
    (0x47, "I/O Direction Mapping"),
    (0x48, "Set I/O Direction Mapping"),
    (0x49, "Extended Optical Input State"),
    (0x4A, "Pin Pad Input State"),
    (0x4B, "Pin Pad Status"),
    (0x4C, "Pin Pad Output"),
    (0x4D, "Pin Pad Command"),
];

/// FIDO Alliance Page (0xF1D0).
static FIDO: Table = &[
    (0x00, "Undefined"),
    (0x01, "U2F Authenticator Device"),
    (0x20, "Input Report Data"),
    (0x21, "Output Report Data"),
];

#[cfg(test)]
mod tests {
    use super::*;

    const PAGES: [u16; 30] = [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x11, 0x12,
        0x14, 0x20, 0x40, 0x41, 0x59, 0x80, 0x82, 0x84, 0x85, 0x8C, 0x8D, 0x8E, 0x90, 0x91, 0xF1D0,
    ];

    #[test]
    fn tables_sorted() {
        for page in PAGES {
            let t = table(page).unwrap();
            assert!(
                t.windows(2).all(|w| w[0].0 < w[1].0),
                "page {page:#06X} is not strictly sorted"
            );
            assert_eq!(t[0].0, 0, "page {page:#06X}");
        }
    }

    #[test]
    fn computed_pages_have_no_table() {
        for page in [0x00, 0x09, 0x0A, 0x10, 0x81, 0x92, 0xFF00] {
            assert!(table(page).is_none(), "page {page:#06X}");
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(lookup(0x07, 0x04), Some("Keyboard a and A"));
        assert_eq!(lookup(0x07, 0xE7), Some("Keyboard Right GUI"));
        assert_eq!(lookup(0x08, 0x02), Some("Caps Lock"));
        assert_eq!(lookup(0x0E, 0x1003), Some("Waveform Click"));
        assert_eq!(lookup(0x01, 0x03), None);
        assert_eq!(lookup(0x90, 0x01), None);
        assert_eq!(lookup(0x09, 0x01), None);
    }
}
