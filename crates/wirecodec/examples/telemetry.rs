//! Encodes a telemetry frame the way a game server would hand it to its
//! transport, then decodes it on the "other side".
//!
//! The frame packs three status flags into a single byte, followed by a tick
//! counter, the unit name, its position and velocity, and a health value:
//!
//! ```text
//! [flags:3 bits + padding][tick:int][name:string][pos:Vector3][vel:Vector2][health:double]
//! ```
//!
//! Run with
//!
//! ```bash
//! cargo run -p wirecodec --example telemetry
//! ```

#![allow(missing_docs)]

use wirecodec::{ByteBuffer, CodecError, Vector2, Vector3};

#[derive(Debug)]
struct Frame {
    alive: bool,
    grounded: bool,
    firing: bool,
    tick: i32,
    name: String,
    position: Vector3,
    velocity: Vector2,
    health: f64,
}

fn encode(frame: &Frame, buf: &mut ByteBuffer) -> Result<(), CodecError> {
    buf.write_bit(frame.alive);
    buf.write_bit(frame.grounded);
    buf.write_bit(frame.firing);
    buf.align();
    buf.write_int(frame.tick);
    buf.write_string(&frame.name)?;
    buf.write_vector3(frame.position);
    buf.write_vector2(frame.velocity);
    buf.write_double(frame.health);
    Ok(())
}

fn decode(buf: &mut ByteBuffer) -> Result<Option<Frame>, CodecError> {
    let (Some(alive), Some(grounded), Some(firing)) = (buf.read_bit(), buf.read_bit(), buf.read_bit())
    else {
        return Ok(None);
    };
    buf.align();
    let Some(tick) = buf.read_int() else {
        return Ok(None);
    };
    let name = buf.read_string()?;
    let (Some(position), Some(velocity), Some(health)) =
        (buf.read_vector3(), buf.read_vector2(), buf.read_double())
    else {
        return Ok(None);
    };
    Ok(Some(Frame {
        alive,
        grounded,
        firing,
        tick,
        name,
        position,
        velocity,
        health,
    }))
}

fn main() -> Result<(), CodecError> {
    let frame = Frame {
        alive: true,
        grounded: false,
        firing: true,
        tick: 48_213,
        name: "Ranger Ñ".to_string(),
        position: Vector3::new(120.5, 4.0, -33.25),
        velocity: Vector2::new(1.5, -0.004),
        health: 87.5,
    };

    let mut buf = ByteBuffer::new();
    encode(&frame, &mut buf)?;
    println!("encoded {} bytes:", buf.len());
    for chunk in buf.as_bytes().chunks(16) {
        let line: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        println!("  {}", line.join(" "));
    }

    // The tiny vertical velocity collapses to 0.0 under the default legacy
    // double mode.
    buf.flip();
    match decode(&mut buf)? {
        Some(decoded) => println!("decoded: {decoded:#?}"),
        None => println!("frame was truncated"),
    }
    Ok(())
}
