use crate::constants::{HEADER_SIZE, LIDAR_CMD_SYNC_BYTE};
use crate::error::RplidarError;
use crate::numeric::{to_string, to_u16_le};
use rplidar_data::Sample;

pub(crate) fn validate_response_header(
    header: &[u8],
    maybe_response_length: Option<u8>,
    type_code: u8,
) -> Result<(), RplidarError> {
    if header.len() != HEADER_SIZE {
        return Err(RplidarError::InvalidHeaderLength(header.len()));
    }
    if header[0..2] != [LIDAR_CMD_SYNC_BYTE, 0x5A] {
        return Err(RplidarError::InvalidMagicNumber(to_string(&header[0..2])));
    }
    match maybe_response_length {
        None => (),
        Some(len) => {
            if header[2] != len {
                return Err(RplidarError::InvalidResponseLength(
                    len.into(),
                    header[2].into(),
                ));
            }
        }
    }
    if header[6] != type_code {
        return Err(RplidarError::InvalidTypeCode(
            type_code.into(),
            header[6].into(),
        ));
    }
    Ok(())
}

/// The two sync bits must be complementary and the check bit set,
/// otherwise the reader has lost the node boundary.
pub(crate) fn is_well_formed_node(raw: &[u8]) -> bool {
    let sync = raw[0] & 0x01;
    let inverted_sync = (raw[0] >> 1) & 0x01;
    sync ^ inverted_sync == 1 && raw[1] & 0x01 == 1
}

pub(crate) fn decode_node(raw: &[u8]) -> Sample {
    let angle_q6 = to_u16_le(raw[1], raw[2]) >> 1;
    Sample {
        // 1/64 degree units to hundredths of a degree
        angle_centideg: ((angle_q6 as u32) * 100 / 64) as u16,
        distance_q2: to_u16_le(raw[3], raw[4]),
        quality: raw[0] >> 2,
        sync: raw[0] & 0x01 == 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_response_header() {
        assert!(matches!(
            validate_response_header(
                &vec![0xA5, 0x5A, 0x03, 0x00, 0x00, 0x00, 0x06],
                Some(0x03),
                0x06
            ),
            Ok(())
        ));

        assert!(matches!(
            validate_response_header(
                &vec![0xA5, 0x5A, 0x03, 0x00, 0x00, 0x00, 0x06, 0x09],
                Some(0x03),
                0x06
            ),
            Err(RplidarError::InvalidHeaderLength(8))
        ));

        assert!(matches!(
            validate_response_header(
                &vec![0xA6, 0x5A, 0x03, 0x00, 0x00, 0x00, 0x06],
                Some(0x03),
                0x06
            ),
            Err(RplidarError::InvalidMagicNumber(_))
        ));

        assert!(matches!(
            validate_response_header(
                &vec![0xA5, 0x2A, 0x03, 0x00, 0x00, 0x00, 0x06],
                Some(0x03),
                0x06
            ),
            Err(RplidarError::InvalidMagicNumber(_))
        ));

        assert!(matches!(
            validate_response_header(
                &vec![0xA5, 0x5A, 0x14, 0x00, 0x00, 0x00, 0x04],
                Some(0x12),
                0x04
            ),
            Err(RplidarError::InvalidResponseLength(18, 20))
        ));

        assert!(matches!(
            validate_response_header(
                &vec![0xA5, 0x5A, 0x05, 0x00, 0x00, 0x40, 0x82],
                None,
                0x81
            ),
            Err(RplidarError::InvalidTypeCode(129, 130))
        ));

        // scan responses have no fixed payload length
        assert!(matches!(
            validate_response_header(&vec![0xA5, 0x5A, 0x05, 0x00, 0x00, 0x40, 0x81], None, 0x81),
            Ok(())
        ));
    }

    #[test]
    fn test_is_well_formed_node() {
        // sync bit set, inverted sync clear, check bit set
        assert!(is_well_formed_node(&[0b0000_1101, 0x01, 0x00, 0x00, 0x00]));
        // inverted sync set, sync clear
        assert!(is_well_formed_node(&[0b0000_1110, 0x01, 0x00, 0x00, 0x00]));
        // both sync bits set
        assert!(!is_well_formed_node(&[0b0000_1111, 0x01, 0x00, 0x00, 0x00]));
        // both sync bits clear
        assert!(!is_well_formed_node(&[0b0000_1100, 0x01, 0x00, 0x00, 0x00]));
        // check bit clear
        assert!(!is_well_formed_node(&[0b0000_1101, 0x02, 0x00, 0x00, 0x00]));
    }

    #[test]
    fn test_decode_node() {
        // quality 20, sync, angle 90 degrees (90 * 64 = 5760), distance 1000.25 mm
        let angle_q6: u16 = 90 * 64;
        let raw = [
            (20 << 2) | 0x01,
            (((angle_q6 & 0x7F) as u8) << 1) | 0x01,
            (angle_q6 >> 7) as u8,
            (4001 & 0xFF) as u8,
            (4001 >> 8) as u8,
        ];
        let sample = decode_node(&raw);
        assert_eq!(sample.quality, 20);
        assert!(sample.sync);
        assert_eq!(sample.angle_centideg, 9000);
        assert_eq!(sample.distance_q2, 4001);
    }

    #[test]
    fn test_decode_node_not_sync() {
        let raw = [(5 << 2) | 0x02, 0x01, 0x00, 0x00, 0x00];
        let sample = decode_node(&raw);
        assert_eq!(sample.quality, 5);
        assert!(!sample.sync);
        assert_eq!(sample.angle_centideg, 0);
        assert_eq!(sample.distance_q2, 0);
        assert!(!sample.has_echo());
    }
}
