// Code generated by xlgen. DO NOT EDIT.
// source: libxl_types.idl
// @generated

/// `uint32` builtin.
pub type Domid = u32;

/// `int32` builtin.
pub type Devid = i32;

/// `blob` builtin.
pub type Uuid = [u8; 16];

/// `blob` builtin.
pub type Mac = [u8; 6];

/// `blob` builtin.
pub type MsVmGenid = [u8; 16];

/// `defbool` builtin.
pub type Defbool = Option<bool>;

/// `bitmap` builtin.
pub type Bitmap = Vec<u8>;

/// `string_list` builtin.
pub type StringList = Vec<String>;

/// `key_value_list` builtin.
pub type KeyValueList = Vec<(String, String)>;

/// `libxl_error` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Error(pub i32);

impl Error {
    /// `nonspecific`.
    pub const NONSPECIFIC: Self = Self(-1);
    /// `version`.
    pub const VERSION: Self = Self(-2);
    /// `fail`.
    pub const FAIL: Self = Self(-3);
    /// `ni`.
    pub const NI: Self = Self(-4);
    /// `nomem`.
    pub const NOMEM: Self = Self(-5);

    /// Returns the schema label of a declared value.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self.0 {
            -1 => Some("nonspecific"),
            -2 => Some("version"),
            -3 => Some("fail"),
            -4 => Some("ni"),
            -5 => Some("nomem"),
            _ => None,
        }
    }

    /// Parses a schema label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "nonspecific" => Some(Self::NONSPECIFIC),
            "version" => Some(Self::VERSION),
            "fail" => Some(Self::FAIL),
            "ni" => Some(Self::NI),
            "nomem" => Some(Self::NOMEM),
            _ => None,
        }
    }

    /// Returns the declared values in schema order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        const VALUES: &[Error] = &[Error::NONSPECIFIC, Error::VERSION, Error::FAIL, Error::NI, Error::NOMEM];
        VALUES
    }
}

impl Default for Error {
    fn default() -> Self {
        Self(0)
    }
}

impl From<i32> for Error {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Error> for i32 {
    fn from(value: Error) -> Self {
        value.0
    }
}

/// `libxl_domain_type` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DomainType(pub i32);

impl DomainType {
    /// `invalid`.
    pub const INVALID: Self = Self(-1);
    /// `hvm`.
    pub const HVM: Self = Self(1);
    /// `pv`.
    pub const PV: Self = Self(2);
    /// `pvh`.
    pub const PVH: Self = Self(3);

    /// Returns the schema label of a declared value.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self.0 {
            -1 => Some("invalid"),
            1 => Some("hvm"),
            2 => Some("pv"),
            3 => Some("pvh"),
            _ => None,
        }
    }

    /// Parses a schema label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "invalid" => Some(Self::INVALID),
            "hvm" => Some(Self::HVM),
            "pv" => Some(Self::PV),
            "pvh" => Some(Self::PVH),
            _ => None,
        }
    }

    /// Returns the declared values in schema order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        const VALUES: &[DomainType] = &[DomainType::INVALID, DomainType::HVM, DomainType::PV, DomainType::PVH];
        VALUES
    }
}

impl Default for DomainType {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<i32> for DomainType {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<DomainType> for i32 {
    fn from(value: DomainType) -> Self {
        value.0
    }
}

/// `libxl_channel_connection` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ChannelConnection(pub i32);

impl ChannelConnection {
    /// `unknown`.
    pub const UNKNOWN: Self = Self(0);
    /// `pty`.
    pub const PTY: Self = Self(1);
    /// `socket`.
    pub const SOCKET: Self = Self(2);

    /// Returns the schema label of a declared value.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("unknown"),
            1 => Some("pty"),
            2 => Some("socket"),
            _ => None,
        }
    }

    /// Parses a schema label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "unknown" => Some(Self::UNKNOWN),
            "pty" => Some(Self::PTY),
            "socket" => Some(Self::SOCKET),
            _ => None,
        }
    }

    /// Returns the declared values in schema order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        const VALUES: &[ChannelConnection] = &[ChannelConnection::UNKNOWN, ChannelConnection::PTY, ChannelConnection::SOCKET];
        VALUES
    }
}

impl Default for ChannelConnection {
    fn default() -> Self {
        Self(0)
    }
}

impl From<i32> for ChannelConnection {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<ChannelConnection> for i32 {
    fn from(value: ChannelConnection) -> Self {
        value.0
    }
}

/// `libxl_tsc_mode` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TscMode(pub i32);

impl TscMode {
    /// `default`.
    pub const DEFAULT: Self = Self(0);
    /// `always_emulate`.
    pub const ALWAYS_EMULATE: Self = Self(1);
    /// `native`.
    pub const NATIVE: Self = Self(2);
    /// `native_paravirt`.
    pub const NATIVE_PARAVIRT: Self = Self(3);

    /// Returns the schema label of a declared value.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("default"),
            1 => Some("always_emulate"),
            2 => Some("native"),
            3 => Some("native_paravirt"),
            _ => None,
        }
    }

    /// Parses a schema label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "default" => Some(Self::DEFAULT),
            "always_emulate" => Some(Self::ALWAYS_EMULATE),
            "native" => Some(Self::NATIVE),
            "native_paravirt" => Some(Self::NATIVE_PARAVIRT),
            _ => None,
        }
    }

    /// Returns the declared values in schema order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        const VALUES: &[TscMode] = &[TscMode::DEFAULT, TscMode::ALWAYS_EMULATE, TscMode::NATIVE, TscMode::NATIVE_PARAVIRT];
        VALUES
    }
}

impl Default for TscMode {
    fn default() -> Self {
        Self(0)
    }
}

impl From<i32> for TscMode {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<TscMode> for i32 {
    fn from(value: TscMode) -> Self {
        value.0
    }
}

/// `libxl_timer_mode` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TimerMode(pub i32);

impl TimerMode {
    /// `unknown`.
    pub const UNKNOWN: Self = Self(-1);
    /// `delay_for_missed_ticks`.
    pub const DELAY_FOR_MISSED_TICKS: Self = Self(0);
    /// `no_delay_for_missed_ticks`.
    pub const NO_DELAY_FOR_MISSED_TICKS: Self = Self(1);
    /// `no_missed_ticks_pending`.
    pub const NO_MISSED_TICKS_PENDING: Self = Self(2);
    /// `one_missed_tick_pending`.
    pub const ONE_MISSED_TICK_PENDING: Self = Self(3);

    /// Returns the schema label of a declared value.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self.0 {
            -1 => Some("unknown"),
            0 => Some("delay_for_missed_ticks"),
            1 => Some("no_delay_for_missed_ticks"),
            2 => Some("no_missed_ticks_pending"),
            3 => Some("one_missed_tick_pending"),
            _ => None,
        }
    }

    /// Parses a schema label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "unknown" => Some(Self::UNKNOWN),
            "delay_for_missed_ticks" => Some(Self::DELAY_FOR_MISSED_TICKS),
            "no_delay_for_missed_ticks" => Some(Self::NO_DELAY_FOR_MISSED_TICKS),
            "no_missed_ticks_pending" => Some(Self::NO_MISSED_TICKS_PENDING),
            "one_missed_tick_pending" => Some(Self::ONE_MISSED_TICK_PENDING),
            _ => None,
        }
    }

    /// Returns the declared values in schema order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        const VALUES: &[TimerMode] = &[TimerMode::UNKNOWN, TimerMode::DELAY_FOR_MISSED_TICKS, TimerMode::NO_DELAY_FOR_MISSED_TICKS, TimerMode::NO_MISSED_TICKS_PENDING, TimerMode::ONE_MISSED_TICK_PENDING];
        VALUES
    }
}

impl Default for TimerMode {
    fn default() -> Self {
        Self::NO_DELAY_FOR_MISSED_TICKS
    }
}

impl From<i32> for TimerMode {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<TimerMode> for i32 {
    fn from(value: TimerMode) -> Self {
        value.0
    }
}

/// `libxl_gic_version` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct GicVersion(pub u8);

impl GicVersion {
    /// `default`.
    pub const DEFAULT: Self = Self(0);
    /// `v2`.
    pub const V2: Self = Self(32);
    /// `v3`.
    pub const V3: Self = Self(48);

    /// Returns the schema label of a declared value.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("default"),
            32 => Some("v2"),
            48 => Some("v3"),
            _ => None,
        }
    }

    /// Parses a schema label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "default" => Some(Self::DEFAULT),
            "v2" => Some(Self::V2),
            "v3" => Some(Self::V3),
            _ => None,
        }
    }

    /// Returns the declared values in schema order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        const VALUES: &[GicVersion] = &[GicVersion::DEFAULT, GicVersion::V2, GicVersion::V3];
        VALUES
    }
}

impl Default for GicVersion {
    fn default() -> Self {
        Self(0)
    }
}

impl From<u8> for GicVersion {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<GicVersion> for u8 {
    fn from(value: GicVersion) -> Self {
        value.0
    }
}

/// `libxl_bios_type` enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct BiosType(pub i32);

impl BiosType {
    /// `unknown`.
    pub const UNKNOWN: Self = Self(0);
    /// `rombios`.
    pub const ROMBIOS: Self = Self(1);
    /// `seabios`.
    pub const SEABIOS: Self = Self(2);
    /// `ovmf`.
    pub const OVMF: Self = Self(3);

    /// Returns the schema label of a declared value.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("unknown"),
            1 => Some("rombios"),
            2 => Some("seabios"),
            3 => Some("ovmf"),
            _ => None,
        }
    }

    /// Parses a schema label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "unknown" => Some(Self::UNKNOWN),
            "rombios" => Some(Self::ROMBIOS),
            "seabios" => Some(Self::SEABIOS),
            "ovmf" => Some(Self::OVMF),
            _ => None,
        }
    }

    /// Returns the declared values in schema order.
    #[must_use]
    pub fn values() -> &'static [Self] {
        const VALUES: &[BiosType] = &[BiosType::UNKNOWN, BiosType::ROMBIOS, BiosType::SEABIOS, BiosType::OVMF];
        VALUES
    }
}

impl Default for BiosType {
    fn default() -> Self {
        Self(0)
    }
}

impl From<i32> for BiosType {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<BiosType> for i32 {
    fn from(value: BiosType) -> Self {
        value.0
    }
}

/// `libxl_channelinfo` structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Channelinfo {
    pub backend: String,
    pub backend_id: u32,
    pub frontend: String,
    pub frontend_id: u32,
    pub devid: Devid,
    pub state: i32,
    pub evtch: i32,
    pub rref: i32,
    pub connection: ChannelConnection,
    /// Payload selected by `connection`.
    pub connection_union: Option<ChannelinfoConnectionUnion>,
}

impl Channelinfo {
    /// Returns true if `connection_union` is absent or selected by `connection`.
    #[must_use]
    pub fn connection_union_matches(&self) -> bool {
        match &self.connection_union {
            Some(payload) => payload.tag() == self.connection,
            None => true,
        }
    }
}

/// Payload of `Channelinfo::connection`, selected by its [`ChannelConnection`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelinfoConnectionUnion {
    /// Payload for [`ChannelConnection::PTY`].
    Pty(ChannelinfoConnectionUnionPty),
}

impl ChannelinfoConnectionUnion {
    /// Returns the discriminant value selecting this payload.
    #[must_use]
    pub const fn tag(&self) -> ChannelConnection {
        match self {
            Self::Pty(_) => ChannelConnection::PTY,
        }
    }
}

/// Implemented by every payload of [`ChannelinfoConnectionUnion`].
pub trait ChannelinfoConnectionUnionVariant: Into<ChannelinfoConnectionUnion> {
    /// Discriminant value selecting the implementor.
    const TAG: ChannelConnection;
}

/// `pty` payload of [`ChannelinfoConnectionUnion`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelinfoConnectionUnionPty {
    pub path: String,
}

impl ChannelinfoConnectionUnionVariant for ChannelinfoConnectionUnionPty {
    const TAG: ChannelConnection = ChannelConnection::PTY;
}

impl From<ChannelinfoConnectionUnionPty> for ChannelinfoConnectionUnion {
    fn from(variant: ChannelinfoConnectionUnionPty) -> Self {
        Self::Pty(variant)
    }
}

/// `libxl_device_channel` structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceChannel {
    /// Domain hosting the backend.
    pub backend_domid: Domid,
    pub backend_domname: String,
    pub devid: Devid,
    pub name: String,
    pub connection: ChannelConnection,
    /// Payload selected by `connection`.
    pub connection_union: Option<DeviceChannelConnectionUnion>,
}

impl DeviceChannel {
    /// Returns true if `connection_union` is absent or selected by `connection`.
    #[must_use]
    pub fn connection_union_matches(&self) -> bool {
        match &self.connection_union {
            Some(payload) => payload.tag() == self.connection,
            None => true,
        }
    }
}

/// Payload of `DeviceChannel::connection`, selected by its [`ChannelConnection`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceChannelConnectionUnion {
    /// Payload for [`ChannelConnection::SOCKET`].
    Socket(DeviceChannelConnectionUnionSocket),
}

impl DeviceChannelConnectionUnion {
    /// Returns the discriminant value selecting this payload.
    #[must_use]
    pub const fn tag(&self) -> ChannelConnection {
        match self {
            Self::Socket(_) => ChannelConnection::SOCKET,
        }
    }
}

/// Implemented by every payload of [`DeviceChannelConnectionUnion`].
pub trait DeviceChannelConnectionUnionVariant: Into<DeviceChannelConnectionUnion> {
    /// Discriminant value selecting the implementor.
    const TAG: ChannelConnection;
}

/// `socket` payload of [`DeviceChannelConnectionUnion`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceChannelConnectionUnionSocket {
    pub path: String,
}

impl DeviceChannelConnectionUnionVariant for DeviceChannelConnectionUnionSocket {
    const TAG: ChannelConnection = ChannelConnection::SOCKET;
}

impl From<DeviceChannelConnectionUnionSocket> for DeviceChannelConnectionUnion {
    fn from(variant: DeviceChannelConnectionUnionSocket) -> Self {
        Self::Socket(variant)
    }
}

/// `libxl_domain_build_info_pv` structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainBuildInfoPv {
    pub kernel: String,
    pub slack_memkb: u64,
    pub bootloader: String,
    pub bootloader_args: StringList,
    pub cmdline: String,
    pub ramdisk: String,
    pub features: String,
    pub e820_host: Defbool,
}

/// `libxl_domain_build_info` structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainBuildInfo {
    pub max_vcpus: i32,
    pub avail_vcpus: Bitmap,
    /// Natively counted by `num_vcpu_hard_affinity`.
    pub vcpu_hard_affinity: Vec<Bitmap>,
    pub tsc_mode: TscMode,
    pub max_memkb: u64,
    pub extra: StringList,
    /// Natively counted by `num_irqs`.
    pub irqs: Vec<u32>,
    pub timer_mode: TimerMode,
    pub r#type: DomainType,
    /// Payload selected by `type`.
    pub type_union: Option<DomainBuildInfoTypeUnion>,
    pub arch_arm: DomainBuildInfoArchArm,
    pub arch_x86: DomainBuildInfoArchX86,
}

impl DomainBuildInfo {
    /// Returns true if `type_union` is absent or selected by `type`.
    #[must_use]
    pub fn type_union_matches(&self) -> bool {
        match &self.type_union {
            Some(payload) => payload.tag() == self.r#type,
            None => true,
        }
    }
}

/// Payload of `DomainBuildInfo::type`, selected by its [`DomainType`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainBuildInfoTypeUnion {
    /// Payload for [`DomainType::HVM`].
    Hvm(DomainBuildInfoTypeUnionHvm),
    /// Payload for [`DomainType::PV`].
    Pv(DomainBuildInfoTypeUnionPv),
    /// Payload for [`DomainType::PVH`].
    Pvh(DomainBuildInfoTypeUnionPvh),
}

impl DomainBuildInfoTypeUnion {
    /// Returns the discriminant value selecting this payload.
    #[must_use]
    pub const fn tag(&self) -> DomainType {
        match self {
            Self::Hvm(_) => DomainType::HVM,
            Self::Pv(_) => DomainType::PV,
            Self::Pvh(_) => DomainType::PVH,
        }
    }
}

/// Implemented by every payload of [`DomainBuildInfoTypeUnion`].
pub trait DomainBuildInfoTypeUnionVariant: Into<DomainBuildInfoTypeUnion> {
    /// Discriminant value selecting the implementor.
    const TAG: DomainType;
}

/// `hvm` payload of [`DomainBuildInfoTypeUnion`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainBuildInfoTypeUnionHvm {
    pub firmware: String,
    pub bios: BiosType,
    pub pae: Defbool,
    pub timer_mode: TimerMode,
    pub ms_vm_genid: MsVmGenid,
    pub serial_list: StringList,
}

impl DomainBuildInfoTypeUnionVariant for DomainBuildInfoTypeUnionHvm {
    const TAG: DomainType = DomainType::HVM;
}

impl From<DomainBuildInfoTypeUnionHvm> for DomainBuildInfoTypeUnion {
    fn from(variant: DomainBuildInfoTypeUnionHvm) -> Self {
        Self::Hvm(variant)
    }
}

/// `pv` payload of [`DomainBuildInfoTypeUnion`].
///
/// Fields of `libxl_domain_build_info_pv`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainBuildInfoTypeUnionPv {
    pub kernel: String,
    pub slack_memkb: u64,
    pub bootloader: String,
    pub bootloader_args: StringList,
    pub cmdline: String,
    pub ramdisk: String,
    pub features: String,
    pub e820_host: Defbool,
}

impl DomainBuildInfoTypeUnionVariant for DomainBuildInfoTypeUnionPv {
    const TAG: DomainType = DomainType::PV;
}

impl From<DomainBuildInfoTypeUnionPv> for DomainBuildInfoTypeUnion {
    fn from(variant: DomainBuildInfoTypeUnionPv) -> Self {
        Self::Pv(variant)
    }
}

/// `pvh` payload of [`DomainBuildInfoTypeUnion`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainBuildInfoTypeUnionPvh {
    pub pvshim: Defbool,
    pub pvshim_path: String,
}

impl DomainBuildInfoTypeUnionVariant for DomainBuildInfoTypeUnionPvh {
    const TAG: DomainType = DomainType::PVH;
}

impl From<DomainBuildInfoTypeUnionPvh> for DomainBuildInfoTypeUnion {
    fn from(variant: DomainBuildInfoTypeUnionPvh) -> Self {
        Self::Pvh(variant)
    }
}

/// Anonymous `libxl_domain_build_info.arch_arm` structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainBuildInfoArchArm {
    pub gic_version: GicVersion,
    pub nr_spis: u32,
}

/// Anonymous `libxl_domain_build_info.arch_x86` structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainBuildInfoArchX86 {
    pub msr_relaxed: Defbool,
}

/// `libxl_dominfo` structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dominfo {
    pub uuid: Uuid,
    pub domid: Domid,
    pub domain_type: DomainType,
    pub platform: KeyValueList,
}

/// `libxl_device_nic` structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceNic {
    pub backend_domid: Domid,
    pub devid: Devid,
    pub mac: Mac,
    pub bridge: String,
}
