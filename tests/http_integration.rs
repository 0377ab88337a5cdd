// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests against a mocked gateway using wiremock.

use avm_homeauto::command::ThermostatCommand;
use avm_homeauto::protocol::challenge_response;
use avm_homeauto::response::MetaData;
use avm_homeauto::response::MetaDataType;
use avm_homeauto::{
    BlindTarget, Error, HkrTemperature, HomeAutomation, HttpConfig, LoginError, OnOff,
    ProtocolError, ValueError,
};
use chrono::{TimeDelta, Utc};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USERNAME: &str = "smarthome";
const PASSWORD: &str = "äbc";
const CHALLENGE: &str = "1234567z";
const SID: &str = "9d4a0bc3e6f7a821";
const COMMAND_PATH: &str = "/webservices/homeautoswitch.lua";

fn session_info(sid: &str, challenge: &str, block_time: u32) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?><SessionInfo><SID>{sid}</SID><Challenge>{challenge}</Challenge><BlockTime>{block_time}</BlockTime><Rights></Rights></SessionInfo>"
    )
}

/// Mounts the two-step login handshake.
async fn mount_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/login_sid.lua"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(session_info(
                "0000000000000000",
                CHALLENGE,
                0,
            )),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/login_sid.lua"))
        .and(query_param("username", USERNAME))
        .and(query_param(
            "response",
            "1234567z-9e224a41eeefa284df7bb0f26c2913e2",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(session_info(SID, CHALLENGE, 0)))
        .with_priority(1)
        .mount(server)
        .await;
}

async fn connect(server: &MockServer) -> HomeAutomation {
    mount_login(server).await;
    HomeAutomation::with_config(HttpConfig::new(server.uri()))
        .with_credentials(USERNAME, PASSWORD)
        .build()
        .await
        .unwrap()
}

/// Mock for one command with the session id.
fn command(name: &str) -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path(COMMAND_PATH))
        .and(query_param("switchcmd", name))
        .and(query_param("sid", SID))
}

fn text(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(body)
}

// ============================================================================
// Login
// ============================================================================

mod login {
    use super::*;

    #[tokio::test]
    async fn challenge_response_handshake() {
        let server = MockServer::start().await;
        let client = connect(&server).await;
        assert!(client.is_connected());

        // the second request carried the computed response
        assert_eq!(
            challenge_response(CHALLENGE, PASSWORD),
            "1234567z-9e224a41eeefa284df7bb0f26c2913e2"
        );
    }

    #[tokio::test]
    async fn existing_session_is_adopted() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/login_sid.lua"))
            .respond_with(text(&session_info(SID, CHALLENGE, 0)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/login_sid.lua"))
            .and(query_param("username", USERNAME))
            .respond_with(text(&session_info(SID, CHALLENGE, 0)))
            .with_priority(1)
            .expect(0)
            .mount(&server)
            .await;
        command("getswitchlist")
            .respond_with(text("\n"))
            .mount(&server)
            .await;

        let client = HomeAutomation::with_config(HttpConfig::new(server.uri()))
            .with_credentials(USERNAME, PASSWORD)
            .build()
            .await
            .unwrap();
        assert!(client.switch_list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/login_sid.lua"))
            .respond_with(text(&session_info("0000000000000000", CHALLENGE, 0)))
            .mount(&server)
            .await;

        let result = HomeAutomation::with_config(HttpConfig::new(server.uri()))
            .with_credentials(USERNAME, "wrong")
            .build()
            .await;
        assert!(matches!(
            result,
            Err(Error::Login(LoginError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn blocked_login() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/login_sid.lua"))
            .respond_with(text(&session_info("0000000000000000", CHALLENGE, 0)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/login_sid.lua"))
            .and(query_param("username", USERNAME))
            .respond_with(text(&session_info("0000000000000000", "abcdef12", 16)))
            .with_priority(1)
            .mount(&server)
            .await;

        let result = HomeAutomation::with_config(HttpConfig::new(server.uri()))
            .with_credentials(USERNAME, PASSWORD)
            .build()
            .await;
        assert!(matches!(result, Err(Error::Login(LoginError::Blocked(16)))));
    }

    #[tokio::test]
    async fn malformed_session_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/login_sid.lua"))
            .respond_with(text("<html>not a session</html>"))
            .mount(&server)
            .await;

        let result = HomeAutomation::with_config(HttpConfig::new(server.uri()))
            .with_credentials(USERNAME, PASSWORD)
            .build()
            .await;
        assert!(matches!(
            result,
            Err(Error::Login(LoginError::Malformed(_)))
        ));
    }

    #[tokio::test]
    async fn unreachable_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/login_sid.lua"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = HomeAutomation::with_config(HttpConfig::new(server.uri()))
            .with_credentials(USERNAME, PASSWORD)
            .build()
            .await;
        assert!(matches!(
            result,
            Err(Error::Login(LoginError::Transport(
                ProtocolError::HttpStatus { status: 404, .. }
            )))
        ));
    }

    #[tokio::test]
    async fn logout_disconnects() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        Mock::given(method("GET"))
            .and(path("/login_sid.lua"))
            .and(query_param("logout", "1"))
            .and(query_param("sid", SID))
            .respond_with(text(&session_info("0000000000000000", CHALLENGE, 0)))
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;
        command("getswitchlist")
            .respond_with(text("1\n"))
            .expect(0)
            .mount(&server)
            .await;

        client.logout().await.unwrap();
        assert!(!client.is_connected());
        assert!(matches!(client.switch_list().await, Err(Error::NotConnected)));
        assert!(matches!(client.logout().await, Err(Error::NotConnected)));
    }

    #[tokio::test]
    async fn relogin_after_logout() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        Mock::given(method("GET"))
            .and(path("/login_sid.lua"))
            .and(query_param("logout", "1"))
            .respond_with(text(&session_info("0000000000000000", CHALLENGE, 0)))
            .with_priority(1)
            .mount(&server)
            .await;
        command("getswitchlist")
            .respond_with(text("111\n"))
            .mount(&server)
            .await;

        client.logout().await.unwrap();
        client.relogin().await.unwrap();
        assert_eq!(client.switch_list().await.unwrap(), vec!["111"]);
    }
}

// ============================================================================
// Response classification
// ============================================================================

mod classification {
    use super::*;

    #[tokio::test]
    async fn embedded_server_error() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getswitchstate")
            .respond_with(text("HTTP/1.0 500 Internal Server Error\nContent-Length: 0\n\n"))
            .mount(&server)
            .await;

        let result = client.switch_state("08761 0500005").await;
        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::InternalServerError))
        ));
    }

    #[tokio::test]
    async fn embedded_server_error_with_error_status() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getswitchstate")
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_string("HTTP/1.0 500 Internal Server Error\n"),
            )
            .mount(&server)
            .await;

        let result = client.switch_state("08761 0500005").await;
        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::InternalServerError))
        ));
    }

    #[tokio::test]
    async fn non_success_status() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getswitchpower")
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let result = client.switch_power("08761 0500005").await;
        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::HttpStatus { status: 400, .. }))
        ));
    }

    #[tokio::test]
    async fn forbidden_is_unauthorized() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getswitchlist")
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        assert!(matches!(
            client.switch_list().await,
            Err(Error::Protocol(ProtocolError::Unauthorized))
        ));
    }

    #[tokio::test]
    async fn unrecognized_scalar() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getswitchpresent")
            .respond_with(text("maybe\n"))
            .mount(&server)
            .await;

        match client.switch_present("1").await {
            Err(Error::Parse(avm_homeauto::ParseError::UnrecognizedValue { raw, .. })) => {
                assert_eq!(raw, "maybe");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

// ============================================================================
// Outlets
// ============================================================================

mod outlets {
    use super::*;

    #[tokio::test]
    async fn switch_list_keeps_order() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getswitchlist")
            .respond_with(text("111,222,333\n"))
            .mount(&server)
            .await;

        assert_eq!(
            client.switch_list().await.unwrap(),
            vec!["111", "222", "333"]
        );
    }

    #[tokio::test]
    async fn switch_on_with_spaced_ain() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("setswitchon")
            .and(query_param("ain", "08761 0500005"))
            .respond_with(text("1\n"))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client.switch_on("08761 0500005").await.unwrap());
    }

    #[tokio::test]
    async fn unknown_readings() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getswitchstate")
            .respond_with(text("inval\n"))
            .mount(&server)
            .await;
        command("getswitchpower")
            .respond_with(text("inval\n"))
            .mount(&server)
            .await;
        command("gettemperature")
            .respond_with(text("inval\n"))
            .mount(&server)
            .await;

        assert_eq!(client.switch_state("1").await.unwrap(), None);
        assert_eq!(client.switch_power("1").await.unwrap(), None);
        assert_eq!(client.temperature("1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn power_and_energy_readings() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getswitchpower")
            .respond_with(text("4500\n"))
            .mount(&server)
            .await;
        command("getswitchenergy")
            .respond_with(text("1234567\n"))
            .mount(&server)
            .await;
        command("getswitchname")
            .respond_with(text("Kaffeemaschine\n"))
            .mount(&server)
            .await;

        assert_eq!(client.switch_power("1").await.unwrap(), Some(4.5));
        assert_eq!(client.switch_energy("1").await.unwrap(), Some(1234.567));
        assert_eq!(client.switch_name("1").await.unwrap(), "Kaffeemaschine");
    }

    #[tokio::test]
    async fn simple_on_off_toggle() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("setsimpleonoff")
            .and(query_param("onoff", "2"))
            .respond_with(text("1\n"))
            .mount(&server)
            .await;

        assert_eq!(
            client.set_simple_on_off("1", OnOff::Toggle).await.unwrap(),
            OnOff::On
        );
    }

    #[tokio::test]
    async fn concurrent_commands_share_session() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getswitchstate")
            .respond_with(text("1\n"))
            .expect(3)
            .mount(&server)
            .await;

        let (a, b, c) = tokio::join!(
            client.switch_state("1"),
            client.switch_state("2"),
            client.switch_state("3"),
        );
        assert_eq!(a.unwrap(), Some(true));
        assert_eq!(b.unwrap(), Some(true));
        assert_eq!(c.unwrap(), Some(true));
    }
}

// ============================================================================
// Lights
// ============================================================================

mod lights {
    use super::*;

    #[tokio::test]
    async fn set_level_out_of_range_never_sent() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("setlevel")
            .respond_with(text("0\n"))
            .expect(0)
            .mount(&server)
            .await;

        let result = client.set_level("13077 0045237-1", 256).await;
        assert!(matches!(
            result,
            Err(Error::Value(ValueError::OutOfRange {
                actual: 256,
                max: 255,
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn set_level() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("setlevel")
            .and(query_param("ain", "13077 0045237-1"))
            .and(query_param("level", "128"))
            .respond_with(text("128\n"))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(client.set_level("13077 0045237-1", 128).await.unwrap(), 128);
    }

    #[tokio::test]
    async fn color_ranges_are_checked() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("setcolor")
            .respond_with(text("0\n"))
            .expect(0)
            .mount(&server)
            .await;
        command("setcolortemperature")
            .respond_with(text("0\n"))
            .expect(0)
            .mount(&server)
            .await;

        assert!(client.set_color("1", 360, 100, None).await.is_err());
        assert!(client.set_color("1", 100, 256, None).await.is_err());
        assert!(client.set_color_temperature("1", 2600, None).await.is_err());
        assert!(client.set_level_percentage("1", 101).await.is_err());
    }

    #[tokio::test]
    async fn set_color_with_duration() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("setcolor")
            .and(query_param("hue", "358"))
            .and(query_param("saturation", "180"))
            .and(query_param("duration", "15"))
            .respond_with(text("1\n"))
            .expect(1)
            .mount(&server)
            .await;

        let duration = Some(std::time::Duration::from_millis(1500));
        assert_eq!(client.set_color("1", 358, 180, duration).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn color_temperature_template() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        Mock::given(method("GET"))
            .and(path(COMMAND_PATH))
            .and(query_param("switchcmd", "addcolorleveltemplate"))
            .and(query_param("name", "Abendlicht"))
            .and(query_param("levelPercentage", "40"))
            .and(query_param("temperature", "2700"))
            .and(query_param("child_1", "13077 0045237-1"))
            .and(query_param("child_2", "13077 0045238-1"))
            .and(query_param("colorpreset", "true"))
            .respond_with(text("60010\n"))
            .expect(1)
            .mount(&server)
            .await;

        let id = client
            .add_color_temperature_template(
                "Abendlicht",
                40,
                2700,
                &["13077 0045237-1", "13077 0045238-1"],
                true,
            )
            .await
            .unwrap();
        assert_eq!(id, 60010);
    }

    #[tokio::test]
    async fn color_defaults() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getcolordefaults")
            .respond_with(text(
                r#"<colordefaults><hsdefaults><hs hue_index="1"><name enum="3">Rot</name><color sat_index="1" hue="358" sat="180" val="255"/></hs></hsdefaults><temperaturedefaults><temp value="2700"/></temperaturedefaults></colordefaults>"#,
            ))
            .mount(&server)
            .await;

        let defaults = client.color_defaults().await.unwrap();
        assert_eq!(defaults.presets().count(), 1);
        assert_eq!(defaults.temperatures(), vec![2700]);
    }
}

// ============================================================================
// Thermostats
// ============================================================================

mod thermostats {
    use super::*;

    #[tokio::test]
    async fn target_temperature_sentinels() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("gethkrtsoll")
            .respond_with(text("253\n"))
            .mount(&server)
            .await;
        command("gethkrkomfort")
            .respond_with(text("42\n"))
            .mount(&server)
            .await;
        command("gethkrabsenk")
            .respond_with(text("34\n"))
            .mount(&server)
            .await;

        assert_eq!(
            client.target_temperature("1").await.unwrap(),
            HkrTemperature::Off
        );
        assert_eq!(
            client.comfort_temperature("1").await.unwrap(),
            HkrTemperature::Celsius(21.0)
        );
        assert_eq!(
            client.eco_temperature("1").await.unwrap(),
            HkrTemperature::Celsius(17.0)
        );
    }

    #[tokio::test]
    async fn set_target_temperature() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("sethkrtsoll")
            .and(query_param("param", "43"))
            .respond_with(text("43\n"))
            .expect(1)
            .mount(&server)
            .await;

        let reported = client
            .set_target_temperature("1", HkrTemperature::Celsius(21.5))
            .await
            .unwrap();
        assert_eq!(reported, HkrTemperature::Celsius(21.5));

        let too_hot = client
            .set_target_temperature("1", HkrTemperature::Celsius(30.0))
            .await;
        assert!(matches!(
            too_hot,
            Err(Error::Value(ValueError::TemperatureOutOfRange(_)))
        ));
    }

    #[tokio::test]
    async fn raw_target_command_is_validated() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("sethkrtsoll")
            .respond_with(text("253\n"))
            .expect(0)
            .mount(&server)
            .await;

        for celsius in [126.5, f64::NAN] {
            let cmd = ThermostatCommand::SetTarget {
                ain: "1".to_string(),
                temperature: HkrTemperature::Celsius(celsius),
            };
            assert!(matches!(
                client.send_command(&cmd).await,
                Err(Error::Value(ValueError::TemperatureOutOfRange(_)))
            ));
        }
    }

    #[tokio::test]
    async fn boost_until() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        let end = Utc::now() + TimeDelta::hours(1);
        let seconds = end.timestamp().to_string();
        command("sethkrboost")
            .and(query_param("endtimestamp", seconds.as_str()))
            .respond_with(text(&format!("{seconds}\n")))
            .expect(1)
            .mount(&server)
            .await;

        let reported = client.set_boost("1", Some(end)).await.unwrap();
        assert_eq!(reported.map(|t| t.timestamp()), Some(end.timestamp()));
    }

    #[tokio::test]
    async fn window_open_disable_and_window_check() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("sethkrwindowopen")
            .and(query_param("endtimestamp", "0"))
            .respond_with(text("0\n"))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(client.set_window_open("1", None).await.unwrap(), None);

        let too_far = Utc::now() + TimeDelta::hours(25);
        assert!(matches!(
            client.set_window_open("1", Some(too_far)).await,
            Err(Error::Value(ValueError::EndTimeTooFar))
        ));
    }
}

// ============================================================================
// Devices, templates, triggers
// ============================================================================

mod devices {
    use super::*;

    const DEVICE_LIST: &str = r#"<devicelist version="1" fwversion="7.57"><device identifier="08761 0500005" id="16" functionbitmask="35712" fwversion="04.25" manufacturer="AVM" productname="FRITZ!DECT 200"><present>1</present><txbusy>0</txbusy><name>Bodhran</name><switch><state>1</state><mode>manuell</mode><lock>0</lock><devicelock>0</devicelock></switch><powermeter><voltage>229841</voltage><power>4500</power><energy>1234</energy></powermeter><temperature><celsius>215</celsius><offset>0</offset></temperature></device></devicelist>"#;

    #[tokio::test]
    async fn device_list_record_and_document() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getdevicelistinfos")
            .respond_with(text(&format!("{DEVICE_LIST}\n")))
            .expect(2)
            .mount(&server)
            .await;

        let list = client.device_list().await.unwrap();
        let device = list.find("08761 0500005").unwrap();
        assert_eq!(device.name, "Bodhran");
        assert_eq!(device.powermeter.as_ref().unwrap().power().unwrap(), Some(4.5));

        let document = client.device_list_xml().await.unwrap();
        assert_eq!(document.name, "devicelist");
        let child = document.get_child("device").unwrap();
        assert_eq!(
            child.attributes.get("identifier").map(String::as_str),
            Some("08761 0500005")
        );
    }

    #[tokio::test]
    async fn set_name_too_long_never_sent() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("setname")
            .respond_with(text("x\n"))
            .expect(0)
            .mount(&server)
            .await;

        let result = client.set_name("1", &"x".repeat(41)).await;
        assert!(matches!(
            result,
            Err(Error::Value(ValueError::NameTooLong { len: 41, max: 40 }))
        ));
    }

    #[tokio::test]
    async fn set_blind_and_metadata() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("setblind")
            .and(query_param("target", "close"))
            .respond_with(text("close\n"))
            .mount(&server)
            .await;
        command("setmetadata")
            .and(query_param("metadata", r#"{"icon":3,"type":"blind"}"#))
            .respond_with(text(""))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(
            client.set_blind("1", BlindTarget::Close).await.unwrap(),
            BlindTarget::Close
        );
        client
            .set_metadata("1", &MetaData::new(3, MetaDataType::Blind))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn trigger_active() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("settriggeractive")
            .and(query_param("ain", "trg0A3C1B-3E6B4B2F9"))
            .and(query_param("active", "0"))
            .respond_with(text("0\n"))
            .mount(&server)
            .await;

        assert!(
            !client
                .set_trigger_active("trg0A3C1B-3E6B4B2F9", false)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn diagnostic_report_skips_missing_trigger_list() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getdevicelistinfos")
            .respond_with(text(DEVICE_LIST))
            .mount(&server)
            .await;
        command("gettemplatelistinfos")
            .respond_with(text(r#"<templatelist version="1"/>"#))
            .mount(&server)
            .await;
        command("getcolordefaults")
            .respond_with(text("<colordefaults/>"))
            .mount(&server)
            .await;
        command("gettriggerlistinfos")
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let report = client.diagnostic_report().await.unwrap();
        assert!(report.starts_with("<Report>\n"));
        assert!(report.contains("<templatelist"));
        assert!(report.contains("<colordefaults/>"));
        assert!(!report.contains("triggerlist"));
        assert!(report.ends_with("</Report>\n"));
    }

    #[tokio::test]
    async fn diagnostic_report_propagates_other_failures() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("getdevicelistinfos")
            .respond_with(text(DEVICE_LIST))
            .mount(&server)
            .await;
        command("gettemplatelistinfos")
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(matches!(
            client.diagnostic_report().await,
            Err(Error::Protocol(ProtocolError::HttpStatus { status: 500, .. }))
        ));
    }

    #[tokio::test]
    async fn subscription_state() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        command("startulesubscription")
            .respond_with(text(""))
            .expect(1)
            .mount(&server)
            .await;
        command("getsubscriptionstate")
            .respond_with(text(
                r#"<state code="1"><latestain>11657 0240192</latestain></state>"#,
            ))
            .mount(&server)
            .await;

        client.start_ule_subscription().await.unwrap();
        let state = client.subscription_state().await.unwrap();
        assert_eq!(state.latest_ain(), Some("11657 0240192"));
    }
}
