use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use flappy_core::Sound;
use log::{error, warn};
use rodio::{Decoder, OutputStream, Sink};

/// Sound packs ship as WAV on Windows and Ogg Vorbis elsewhere.
const SOUND_EXTENSION: &str = if cfg!(windows) { "wav" } else { "ogg" };

/// Where `sound` lives inside the assets root.
pub fn sound_path(root: &Path, sound: Sound) -> PathBuf {
    root.join("sounds")
        .join(SOUND_EXTENSION)
        .join(format!("{}.{SOUND_EXTENSION}", sound.name()))
}

struct SoundThread {
    receiver: Receiver<Sound>,
    sound_files: HashMap<Sound, Vec<u8>>,
}

impl SoundThread {
    fn new(receiver: Receiver<Sound>, root: &Path) -> Option<Self> {
        let mut sound_files = HashMap::new();

        for sound in Sound::ALL {
            let path = sound_path(root, sound);
            match fs::read(&path) {
                Ok(bytes) => {
                    sound_files.insert(sound, bytes);
                }
                Err(e) => {
                    warn!("Failed to load sound {sound:?} from {}: {e}", path.display());
                }
            }
        }

        if sound_files.is_empty() {
            warn!("No sound files could be loaded, disabling audio");
            return None;
        }

        Some(Self {
            receiver,
            sound_files,
        })
    }

    fn run(self) {
        // The stream must stay alive for as long as sounds may play.
        let Ok((_stream, stream_handle)) = OutputStream::try_default() else {
            error!("Failed to open default audio output stream, disabling audio");
            return;
        };

        while let Ok(sound) = self.receiver.recv() {
            let Some(bytes) = self.sound_files.get(&sound) else {
                warn!("No audio data for sound {sound:?}");
                continue;
            };
            let source = match Decoder::new(Cursor::new(bytes.clone())) {
                Ok(source) => source,
                Err(e) => {
                    error!("Failed to decode sound {sound:?}: {e}");
                    continue;
                }
            };
            // One sink per effect so overlapping sounds mix instead of queueing.
            match Sink::try_new(&stream_handle) {
                Ok(sink) => {
                    sink.append(source);
                    sink.detach();
                }
                Err(e) => error!("Failed to create audio sink: {e}"),
            }
        }
        log::debug!("Audio channel closed, stopping sound thread");
    }
}

/// Main-thread handle that forwards play requests to the audio thread.
pub struct SoundManager {
    sender: Sender<Sound>,
}

impl SoundManager {
    /// Preload the sound pack under `root` and start the audio thread.
    ///
    /// Returns `None` when no sound could be loaded or the thread could not
    /// be spawned; the game then runs silently.
    pub fn new(root: &Path) -> Option<Self> {
        let (sender, receiver) = mpsc::channel::<Sound>();
        let sound_thread = SoundThread::new(receiver, root)?;

        if let Err(e) = thread::Builder::new()
            .name("flappy_sound".into())
            .spawn(move || sound_thread.run())
        {
            error!("Failed to spawn audio thread: {e}");
            return None;
        }

        Some(Self { sender })
    }

    pub fn play(&self, sound: Sound) {
        // A closed channel just means audio went away; keep playing silently.
        let _ = self.sender.send(sound);
    }
}
