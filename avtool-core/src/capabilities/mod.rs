//! The capability registry: compiled-in tables of the formats, codecs,
//! bitstream filters, protocols and frame filters this build carries.
//!
//! The front end only enumerates these sets (the `-formats`, `-codecs`,
//! `-bsfs`, `-protocols` and `-filters` reports); the implementations live
//! elsewhere in the toolchain. Tables are static, sorted by name, and
//! exposed through the narrow [`list`]/[`find`] interface.

/// Which capability set to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityKind {
    Formats,
    Codecs,
    BitstreamFilters,
    Protocols,
    Filters,
}

/// One installed capability.
///
/// `tags` is the short flag column shown by the listing reports: `DE` for a
/// demuxer+muxer, `DEV`/`DEA`/`DES` for codecs (decode/encode plus
/// video/audio/subtitle), `IO` for protocols, `V`/`A` for filters. A `.`
/// marks an absent flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub name: &'static str,
    pub tags: &'static str,
    pub summary: &'static str,
}

const fn cap(name: &'static str, tags: &'static str, summary: &'static str) -> Capability {
    Capability { name, tags, summary }
}

// Tables are kept sorted by name so `find` can binary-search them.

const FORMATS: &[Capability] = &[
    cap("aac", "D.", "raw ADTS AAC"),
    cap("avi", "DE", "AVI (Audio Video Interleaved)"),
    cap("flac", "DE", "raw FLAC"),
    cap("flv", "DE", "FLV (Flash Video)"),
    cap("matroska", "DE", "Matroska"),
    cap("mov", "DE", "QuickTime / MOV"),
    cap("mp3", "DE", "MP3 (MPEG audio layer 3)"),
    cap("mp4", ".E", "MP4 (MPEG-4 Part 14)"),
    cap("mpegts", "DE", "MPEG-TS (MPEG-2 Transport Stream)"),
    cap("null", ".E", "raw null stream"),
    cap("ogg", "DE", "Ogg"),
    cap("rawvideo", "DE", "raw video"),
    cap("wav", "DE", "WAV / WAVE (Waveform Audio)"),
    cap("webm", ".E", "WebM"),
    cap("yuv4mpegpipe", "DE", "YUV4MPEG pipe"),
];

const CODECS: &[Capability] = &[
    cap("aac", "DEA", "AAC (Advanced Audio Coding)"),
    cap("ac3", "DEA", "ATSC A/52A (AC-3)"),
    cap("av1", "DEV", "Alliance for Open Media AV1"),
    cap("flac", "DEA", "FLAC (Free Lossless Audio Codec)"),
    cap("h264", "DEV", "H.264 / AVC / MPEG-4 AVC"),
    cap("hevc", "DEV", "H.265 / HEVC (High Efficiency Video Coding)"),
    cap("mjpeg", "DEV", "Motion JPEG"),
    cap("mp3", "DEA", "MP3 (MPEG audio layer 3)"),
    cap("mpeg2video", "DEV", "MPEG-2 video"),
    cap("opus", "DEA", "Opus"),
    cap("pcm_s16le", "DEA", "PCM signed 16-bit little-endian"),
    cap("subrip", "DES", "SubRip subtitle"),
    cap("theora", "D.V", "Theora"),
    cap("vp8", "DEV", "On2 VP8"),
    cap("vp9", "DEV", "Google VP9"),
];

const BITSTREAM_FILTERS: &[Capability] = &[
    cap("aac_adtstoasc", "A", "ADTS AAC to MPEG-4 AudioSpecificConfig"),
    cap("av1_metadata", "V", "AV1 metadata editing"),
    cap("extract_extradata", "V", "extract in-band extradata"),
    cap("h264_metadata", "V", "H.264 metadata editing"),
    cap("h264_mp4toannexb", "V", "H.264 MP4 to Annex B"),
    cap("hevc_mp4toannexb", "V", "HEVC MP4 to Annex B"),
    cap("null", ".", "pass packets through unchanged"),
    cap("remove_extradata", ".", "strip in-band extradata"),
    cap("vp9_superframe", "V", "merge VP9 invisible frames into superframes"),
];

const PROTOCOLS: &[Capability] = &[
    cap("concat", "I.", "virtual concatenation"),
    cap("data", "I.", "data URI"),
    cap("file", "IO", "local file"),
    cap("ftp", "IO", "FTP"),
    cap("http", "IO", "HTTP"),
    cap("https", "IO", "HTTP over TLS"),
    cap("pipe", "IO", "UNIX pipe"),
    cap("rtmp", "IO", "Real-Time Messaging Protocol"),
    cap("rtp", "IO", "Real-time Transport Protocol"),
    cap("tcp", "IO", "raw TCP"),
    cap("tls", "IO", "TLS over TCP"),
    cap("udp", "IO", "raw UDP"),
    cap("unix", "IO", "UNIX domain socket"),
];

const FILTERS: &[Capability] = &[
    cap("amix", "A", "mix several audio streams"),
    cap("aresample", "A", "resample audio"),
    cap("atempo", "A", "adjust audio tempo"),
    cap("crop", "V", "crop the input video"),
    cap("cropdetect", "V", "detect crop borders"),
    cap("fade", "V", "fade in/out the input video"),
    cap("format", "V", "constrain the output pixel format"),
    cap("fps", "V", "force constant frame rate"),
    cap("hqdn3d", "V", "high-quality 3D denoiser"),
    cap("overlay", "V", "overlay one video on another"),
    cap("pad", "V", "pad the input video"),
    cap("scale", "V", "scale the input video"),
    cap("transpose", "V", "rotate/flip the input video"),
    cap("trim", "V", "pick a contiguous section of the input"),
    cap("volume", "A", "adjust audio volume"),
    cap("yadif", "V", "deinterlace the input video"),
];

/// The installed capabilities of `kind`, sorted by name.
pub fn list(kind: CapabilityKind) -> &'static [Capability] {
    match kind {
        CapabilityKind::Formats => FORMATS,
        CapabilityKind::Codecs => CODECS,
        CapabilityKind::BitstreamFilters => BITSTREAM_FILTERS,
        CapabilityKind::Protocols => PROTOCOLS,
        CapabilityKind::Filters => FILTERS,
    }
}

/// Look up one capability by name.
pub fn find(kind: CapabilityKind, name: &str) -> Option<&'static Capability> {
    let table = list(kind);
    table
        .binary_search_by(|entry| entry.name.cmp(name))
        .ok()
        .map(|index| &table[index])
}
