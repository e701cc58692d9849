pub mod hex_0x_bytes;
pub mod hex_0x_primitive_types_h160;
pub mod hex_0x_primitive_types_h256;
pub mod hex_0x_primitive_types_u256;
pub mod hex_0x_u64;
pub mod hex_0x_utxo;
pub mod ip_port;
pub mod rfc_3339;

#[cfg(feature = "codec_base64")]
#[cfg_attr(docsrs, doc(cfg(feature = "codec_base64")))]
pub mod base64_bytes;

#[cfg(feature = "codec_big_int")]
#[cfg_attr(docsrs, doc(cfg(feature = "codec_big_int")))]
pub mod hex_0x_big_int;
