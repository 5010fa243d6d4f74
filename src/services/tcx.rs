// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! TCX (Training Center XML v2) document writer.
//!
//! The document always has the TCX header and footer. Between them it holds
//! one biking activity with a single lap when the track has at least two
//! samples, and nothing otherwise.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::models::{ActivitySummary, Sample, Track};
use crate::time_utils::format_utc_rfc3339;

const TCX_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2 \
     http://www.garmin.com/xmlschemas/TrainingCenterDatabasev2.xsd";
const EXTENSION_NAMESPACES: [(&str, &str); 4] = [
    ("xmlns:ns2", "http://www.garmin.com/xmlschemas/UserProfile/v2"),
    ("xmlns:ns3", "http://www.garmin.com/xmlschemas/ActivityExtension/v2"),
    ("xmlns:ns4", "http://www.garmin.com/xmlschemas/ProfileExtension/v1"),
    ("xmlns:ns5", "http://www.garmin.com/xmlschemas/ActivityGoals/v1"),
];

/// Sport label written on every activity.
pub const SPORT: &str = "Biking";

const ROOT: &str = "TrainingCenterDatabase";
const ACTIVITIES: &str = "Activities";

/// Streams a TCX document into any writer.
pub struct TcxWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> TcxWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new_with_indent(inner, b' ', 2),
        }
    }

    /// XML declaration, root element and the opening `Activities` tag.
    pub fn write_header(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("no"))))?;

        let mut root = BytesStart::new(ROOT);
        root.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
        for ns in EXTENSION_NAMESPACES {
            root.push_attribute(ns);
        }
        root.push_attribute(("xmlns", TCX_NAMESPACE));
        root.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
        self.writer.write_event(Event::Start(root))?;

        self.start(ACTIVITIES)
    }

    /// Write the activity for `track`.
    ///
    /// Returns `false` without writing anything if the track is too short to
    /// form a lap.
    pub fn write_activity(&mut self, track: &Track) -> Result<bool> {
        let Some(summary) = track.summary() else {
            return Ok(false);
        };
        let start_time = format_utc_rfc3339(summary.start_time);

        let mut activity = BytesStart::new("Activity");
        activity.push_attribute(("Sport", SPORT));
        self.writer.write_event(Event::Start(activity))?;
        self.text_element("Id", &start_time)?;

        self.write_lap(&summary, &start_time, track.samples())?;

        self.end("Activity")?;
        Ok(true)
    }

    fn write_lap(
        &mut self,
        summary: &ActivitySummary,
        start_time: &str,
        samples: &[Sample],
    ) -> Result<()> {
        let mut lap = BytesStart::new("Lap");
        lap.push_attribute(("StartTime", start_time));
        self.writer.write_event(Event::Start(lap))?;

        self.text_element("TotalTimeSeconds", &summary.total_time_seconds.to_string())?;
        self.text_element("DistanceMeters", &format_decimal(summary.total_distance_meters))?;
        self.text_element("Calories", "0")?;
        self.text_element("Intensity", "Active")?;
        self.text_element("TriggerMethod", "Manual")?;

        self.start("Track")?;
        for sample in samples {
            self.write_trackpoint(sample)?;
        }
        self.end("Track")?;

        self.end("Lap")
    }

    fn write_trackpoint(&mut self, sample: &Sample) -> Result<()> {
        self.start("Trackpoint")?;
        self.text_element("Time", &format_utc_rfc3339(sample.timestamp))?;

        self.start("Position")?;
        self.text_element("LatitudeDegrees", &format_decimal(sample.latitude()))?;
        self.text_element("LongitudeDegrees", &format_decimal(sample.longitude()))?;
        self.end("Position")?;

        self.text_element("AltitudeMeters", &format_decimal(sample.altitude))?;
        self.text_element("DistanceMeters", &format_decimal(sample.distance))?;

        if let Some(bpm) = sample.heart_rate.filter(|&bpm| bpm > 0) {
            self.start("HeartRateBpm")?;
            self.text_element("Value", &bpm.to_string())?;
            self.end("HeartRateBpm")?;
        }

        self.end("Trackpoint")
    }

    /// Closing `Activities` and root tags.
    pub fn write_footer(&mut self) -> Result<()> {
        self.end(ACTIVITIES)?;
        self.end(ROOT)?;
        self.writer.get_mut().write_all(b"\n")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn start(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(name)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }
}

/// Write a complete document for `track`, returning whether an activity was
/// included.
pub fn write_tcx<W: Write>(inner: W, track: &Track) -> Result<bool> {
    let mut tcx = TcxWriter::new(inner);
    tcx.write_header()?;
    let written = tcx.write_activity(track)?;
    tcx.write_footer()?;
    tcx.into_inner().flush()?;
    Ok(written)
}

/// Shortest round-trip rendering that always keeps a fractional part
/// (`500.0`, `47.25`) and never uses exponent notation.
pub fn format_decimal(value: f64) -> String {
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use geo::Point;

    fn sample(minute: u32, distance: f64, heart_rate: Option<u32>) -> Sample {
        Sample {
            timestamp: Utc.with_ymd_and_hms(2020, 1, 1, 0, minute, 0).unwrap(),
            position: Point::new(8.5, 47.25),
            altitude: 412.5,
            distance,
            heart_rate,
            temperature: Some(19.0),
        }
    }

    fn render(track: &Track) -> String {
        let mut out = Vec::new();
        write_tcx(&mut out, track).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_decimal_keeps_fraction() {
        assert_eq!(format_decimal(500.0), "500.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(47.25), "47.25");
        assert_eq!(format_decimal(-12.125), "-12.125");
    }

    #[test]
    fn test_format_decimal_near_zero_has_no_exponent() {
        let lon = crate::models::semicircles_to_degrees(-1193);
        let text = format_decimal(lon);

        assert!(!text.contains('e'), "got {text}");
        assert!(text.starts_with("-0.0000"));
        assert_eq!(text.parse::<f64>().unwrap(), lon);

        assert_eq!(format_decimal(1e-7), "0.0000001");
        assert_eq!(format_decimal(-0.0), "-0.0");
    }

    #[test]
    fn test_empty_track_has_header_and_footer_only() {
        let xml = render(&Track::default());

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>"));
        assert!(xml.contains("<TrainingCenterDatabase "));
        assert!(xml.contains(&format!("xmlns=\"{TCX_NAMESPACE}\"")));
        assert!(xml.contains("<Activities>"));
        assert!(xml.contains("</Activities>"));
        assert!(xml.trim_end().ends_with("</TrainingCenterDatabase>"));
        assert!(!xml.contains("<Activity "));
        assert!(!xml.contains("<Lap"));
    }

    #[test]
    fn test_single_sample_writes_no_activity() {
        let track = Track {
            samples: vec![sample(0, 0.0, Some(120))],
        };
        let mut out = Vec::new();

        let written = write_tcx(&mut out, &track).unwrap();

        assert!(!written);
        assert!(!String::from_utf8(out).unwrap().contains("<Trackpoint>"));
    }

    #[test]
    fn test_lap_totals_and_fixed_fields() {
        let track = Track {
            samples: vec![sample(0, 0.0, None), sample(10, 500.0, None)],
        };
        let xml = render(&track);

        assert!(xml.contains("<Activity Sport=\"Biking\">"));
        assert!(xml.contains("<Id>2020-01-01T00:00:00Z</Id>"));
        assert!(xml.contains("<Lap StartTime=\"2020-01-01T00:00:00Z\">"));
        assert!(xml.contains("<TotalTimeSeconds>600</TotalTimeSeconds>"));
        assert!(xml.contains("<DistanceMeters>500.0</DistanceMeters>"));
        assert!(xml.contains("<Calories>0</Calories>"));
        assert!(xml.contains("<Intensity>Active</Intensity>"));
        assert!(xml.contains("<TriggerMethod>Manual</TriggerMethod>"));
        assert_eq!(xml.matches("<Trackpoint>").count(), 2);
    }

    #[test]
    fn test_trackpoint_fields() {
        let track = Track {
            samples: vec![sample(0, 0.0, None), sample(1, 12.5, None)],
        };
        let xml = render(&track);

        assert!(xml.contains("<Time>2020-01-01T00:01:00Z</Time>"));
        assert!(xml.contains("<LatitudeDegrees>47.25</LatitudeDegrees>"));
        assert!(xml.contains("<LongitudeDegrees>8.5</LongitudeDegrees>"));
        assert!(xml.contains("<AltitudeMeters>412.5</AltitudeMeters>"));
        assert!(xml.contains("<DistanceMeters>12.5</DistanceMeters>"));
        assert!(!xml.contains("19.0"), "temperature must not be written");
    }

    #[test]
    fn test_heart_rate_only_when_positive() {
        let track = Track {
            samples: vec![
                sample(0, 0.0, Some(0)),
                sample(1, 10.0, None),
                sample(2, 20.0, Some(145)),
            ],
        };
        let xml = render(&track);

        assert_eq!(xml.matches("<HeartRateBpm>").count(), 1);
        assert!(xml.contains("<Value>145</Value>"));
    }

    #[test]
    fn test_trackpoints_in_track_order() {
        let track = Track {
            samples: vec![sample(0, 0.0, None), sample(5, 1.0, None), sample(9, 2.0, None)],
        };
        let xml = render(&track);

        let first = xml.find("<Time>2020-01-01T00:00:00Z</Time>").unwrap();
        let second = xml.find("<Time>2020-01-01T00:05:00Z</Time>").unwrap();
        let third = xml.find("<Time>2020-01-01T00:09:00Z</Time>").unwrap();
        assert!(first < second && second < third);
    }
}
