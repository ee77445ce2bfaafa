// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.

use crate::Error;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Seconds since the Unix epoch, the representation CDN tokens carry.
pub fn unix_seconds(t: DateTime) -> i64 {
    t.timestamp()
}

/// Parse time from RFC3339.
///
/// All of the following are valid:
///
/// - `2022-03-13T07:20:04Z`
/// - `2022-03-01T08:12:34+00:00`
/// - `2022-03-01T08:12:34.00+00:00`
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc3339(s).map_err(|e| {
        Error::config_invalid(format!("parse {s} into rfc3339 failed")).with_source(e)
    })?;

    Ok(t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn test_time() -> DateTime {
        Utc.with_ymd_and_hms(2022, 9, 13, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_unix_seconds() {
        let t = test_time();
        assert_eq!(unix_seconds(t), 1663070400);
    }

    #[test_case("2022-09-13T12:00:00Z"; "with Z")]
    #[test_case("2022-09-13T12:00:00+00:00"; "with offset")]
    #[test_case("2022-09-13T14:00:00+02:00"; "with non utc offset")]
    #[test_case("2022-09-13T12:00:00.00+00:00"; "with fraction")]
    fn test_parse_rfc3339(input: &str) {
        assert_eq!(parse_rfc3339(input).unwrap(), test_time());
    }

    #[test]
    fn test_parse_rfc3339_invalid() {
        let err = parse_rfc3339("yesterday").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::ConfigInvalid);
    }
}
