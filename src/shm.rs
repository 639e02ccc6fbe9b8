// src/shm.rs

//! Anonymous shared-memory buffers.
//!
//! A [`SharedBuffer`] is a POSIX shared memory object that is mapped
//! read/write into this process and whose name is unlinked the moment it is
//! created, so no other process can open it by name. The file descriptor can
//! be handed to a compositor (e.g. `wl_shm.create_pool`) and then dropped
//! with [`SharedBuffer::close_fd`]; the mapping stays valid until the buffer
//! itself is dropped.
//!
//! Naming and collision retries are internal: callers only see
//! [`SharedBuffer::allocate`].

use crate::error::{Error, Result};
use crate::pixmap::{Cell, CELL_SIZE};

use log::{debug, trace, warn};
use nix::errno::Errno;
use nix::fcntl::OFlag;
use nix::sys::mman::{self, MapFlags, ProtFlags};
use nix::sys::stat::Mode;
use nix::time::{clock_gettime, ClockId};
use std::ffi::c_void;
use std::num::NonZeroUsize;
use std::os::fd::{AsFd, BorrowedFd, OwnedFd};
use std::ptr::NonNull;

/// Upper bound on exclusive-create attempts before giving up.
pub const MAX_NAME_ATTEMPTS: u32 = 100;

const NAME_PREFIX: &str = "/canvas_shm-";
const NAME_SUFFIX_LEN: usize = 6;

/// Six symbols from a 32-symbol alphabet (`A`-`P`, `a`-`p`), five bits of
/// `seed` per symbol, least significant first.
fn random_suffix(mut seed: u64) -> [u8; NAME_SUFFIX_LEN] {
    let mut out = [0u8; NAME_SUFFIX_LEN];
    for c in out.iter_mut() {
        *c = b'A' + (seed & 15) as u8 + ((seed & 16) as u8) * 2;
        seed >>= 5;
    }
    out
}

fn candidate_name() -> String {
    // Sub-second field of the monotonic clock. If the clock is unavailable
    // the name is still valid, collisions are just more likely.
    let nanos = clock_gettime(ClockId::CLOCK_MONOTONIC)
        .map(|ts| ts.tv_nsec() as u64)
        .unwrap_or(0);
    let suffix = random_suffix(nanos);
    let mut name = String::with_capacity(NAME_PREFIX.len() + NAME_SUFFIX_LEN);
    name.push_str(NAME_PREFIX);
    name.extend(suffix.iter().map(|&b| b as char));
    name
}

/// The process-wide namespace shared memory objects are created in.
trait Namespace {
    fn create_exclusive(&mut self, name: &str) -> nix::Result<OwnedFd>;
    fn unlink(&mut self, name: &str) -> nix::Result<()>;
}

struct PosixShm;

impl Namespace for PosixShm {
    fn create_exclusive(&mut self, name: &str) -> nix::Result<OwnedFd> {
        mman::shm_open(
            name,
            OFlag::O_CREAT | OFlag::O_EXCL | OFlag::O_RDWR | OFlag::O_CLOEXEC,
            Mode::S_IRUSR | Mode::S_IWUSR,
        )
    }

    fn unlink(&mut self, name: &str) -> nix::Result<()> {
        mman::shm_unlink(name)
    }
}

/// Creates a fresh object under a random name and unlinks the name again.
fn create_anonymous(ns: &mut impl Namespace) -> Result<OwnedFd> {
    for attempt in 1..=MAX_NAME_ATTEMPTS {
        let name = candidate_name();
        match ns.create_exclusive(&name) {
            Ok(fd) => {
                if let Err(e) = ns.unlink(&name) {
                    // The fd is still usable; the name just lingers.
                    warn!("shm_unlink({}) failed: {}", name, e);
                }
                trace!("Created anonymous shm object on attempt {}", attempt);
                return Ok(fd);
            }
            Err(Errno::EEXIST) => {
                trace!("shm name {} already taken (attempt {})", name, attempt);
            }
            Err(e) => return Err(Error::allocation("shm_open", e)),
        }
    }
    Err(Error::RetriesExhausted {
        attempts: MAX_NAME_ATTEMPTS,
    })
}

fn truncate(fd: &OwnedFd, size: usize) -> Result<()> {
    let len = libc::off_t::try_from(size)
        .map_err(|_| Error::allocation_msg(format!("size {} does not fit off_t", size)))?;
    loop {
        match nix::unistd::ftruncate(fd.as_fd(), len) {
            Ok(()) => return Ok(()),
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(Error::allocation("ftruncate", e)),
        }
    }
}

/// A read/write mapping of an anonymous shared memory object.
#[derive(Debug)]
pub struct SharedBuffer {
    ptr: NonNull<c_void>,
    len: usize,
    fd: Option<OwnedFd>,
}

impl SharedBuffer {
    /// Allocates and maps `size` bytes of zeroed shared memory.
    ///
    /// Fails with [`Error::RetriesExhausted`] if no free name was found in
    /// [`MAX_NAME_ATTEMPTS`] tries and with [`Error::AllocationFailure`] if
    /// creating, sizing or mapping the object failed. Nothing acquired along
    /// the way survives a failure.
    pub fn allocate(size: usize) -> Result<Self> {
        Self::allocate_in(&mut PosixShm, size)
    }

    fn allocate_in(ns: &mut impl Namespace, size: usize) -> Result<Self> {
        let length = NonZeroUsize::new(size)
            .ok_or_else(|| Error::allocation_msg("zero-sized shared buffer"))?;

        // From here on every early return drops `fd`, which closes it.
        let fd = create_anonymous(ns)?;
        truncate(&fd, size)?;

        // SAFETY: fresh mapping of an fd we own, no fixed address requested.
        let ptr = unsafe {
            mman::mmap(
                None,
                length,
                ProtFlags::PROT_READ | ProtFlags::PROT_WRITE,
                MapFlags::MAP_SHARED,
                fd.as_fd(),
                0,
            )
        }
        .map_err(|e| Error::allocation("mmap", e))?;

        debug!("Mapped {} bytes of anonymous shared memory at {:p}", size, ptr);
        Ok(Self {
            ptr,
            len: size,
            fd: Some(fd),
        })
    }

    /// Length of the mapping in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The backing descriptor, until [`close_fd`](Self::close_fd) is called.
    pub fn fd(&self) -> Option<BorrowedFd<'_>> {
        self.fd.as_ref().map(|fd| fd.as_fd())
    }

    /// Closes the backing descriptor. The mapping stays valid.
    pub fn close_fd(&mut self) {
        if self.fd.take().is_some() {
            trace!("Closed shm descriptor for mapping {:p}", self.ptr);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: `ptr` maps `len` readable bytes for the lifetime of `self`.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr() as *const u8, self.len) }
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        // SAFETY: as above, and `&mut self` guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr() as *mut u8, self.len) }
    }

    /// The mapping as color cells. mmap returns page-aligned memory, so the
    /// cast is always aligned; a trailing partial cell is not exposed.
    pub fn cells(&self) -> &[Cell] {
        // SAFETY: page alignment satisfies `Cell` alignment; length rounded down.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr() as *const Cell, self.len / CELL_SIZE) }
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        // SAFETY: as in `cells`, plus exclusive access through `&mut self`.
        unsafe {
            std::slice::from_raw_parts_mut(self.ptr.as_ptr() as *mut Cell, self.len / CELL_SIZE)
        }
    }
}

impl Drop for SharedBuffer {
    fn drop(&mut self) {
        trace!("Unmapping {} bytes at {:p}", self.len, self.ptr);
        // SAFETY: `ptr`/`len` are exactly what mmap returned and nothing
        // borrowed from the mapping outlives `self`.
        if let Err(e) = unsafe { mman::munmap(self.ptr, self.len) } {
            warn!("munmap({:p}, {}) failed: {}", self.ptr, self.len, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    /// Every name is already taken.
    struct Crowded {
        attempts: u32,
    }

    impl Namespace for Crowded {
        fn create_exclusive(&mut self, _name: &str) -> nix::Result<OwnedFd> {
            self.attempts += 1;
            Err(Errno::EEXIST)
        }
        fn unlink(&mut self, _name: &str) -> nix::Result<()> {
            panic!("nothing was created");
        }
    }

    /// Real namespace that remembers which names it created and unlinked.
    #[derive(Default)]
    struct Recording {
        created: Vec<String>,
        unlinked: Vec<String>,
        collisions_left: u32,
    }

    impl Namespace for Recording {
        fn create_exclusive(&mut self, name: &str) -> nix::Result<OwnedFd> {
            if self.collisions_left > 0 {
                self.collisions_left -= 1;
                return Err(Errno::EEXIST);
            }
            let fd = PosixShm.create_exclusive(name)?;
            self.created.push(name.to_string());
            Ok(fd)
        }
        fn unlink(&mut self, name: &str) -> nix::Result<()> {
            self.unlinked.push(name.to_string());
            PosixShm.unlink(name)
        }
    }

    #[test]
    fn it_should_build_names_from_a_32_symbol_alphabet() {
        let suffix = random_suffix(0);
        assert_eq!(&suffix, b"AAAAAA");

        // 0b11111 -> 'p', then 0b00001 -> 'B'.
        let suffix = random_suffix(0b00001_11111);
        assert_eq!(suffix[0], b'p');
        assert_eq!(suffix[1], b'B');

        for seed in [1u64, 999_999_999, u64::MAX, 0x1234_5678] {
            for c in random_suffix(seed) {
                assert!((b'A'..=b'P').contains(&c) || (b'a'..=b'p').contains(&c));
            }
        }

        let name = candidate_name();
        assert!(name.starts_with(NAME_PREFIX));
        assert_eq!(name.len(), NAME_PREFIX.len() + NAME_SUFFIX_LEN);
    }

    #[test]
    fn it_should_give_up_after_a_bounded_number_of_collisions() {
        let mut ns = Crowded { attempts: 0 };
        let err = SharedBuffer::allocate_in(&mut ns, 4096).unwrap_err();
        assert!(matches!(err, Error::RetriesExhausted { attempts: 100 }));
        assert_eq!(ns.attempts, MAX_NAME_ATTEMPTS);
    }

    #[test]
    fn it_should_fail_fast_on_errors_other_than_collisions() {
        struct Denied;
        impl Namespace for Denied {
            fn create_exclusive(&mut self, _name: &str) -> nix::Result<OwnedFd> {
                Err(Errno::EACCES)
            }
            fn unlink(&mut self, _name: &str) -> nix::Result<()> {
                Ok(())
            }
        }
        let err = SharedBuffer::allocate_in(&mut Denied, 64).unwrap_err();
        assert!(matches!(
            err,
            Error::AllocationFailure {
                source: Some(Errno::EACCES),
                ..
            }
        ));
    }

    #[test]
    fn it_should_reject_zero_sized_buffers() {
        assert!(matches!(
            SharedBuffer::allocate(0),
            Err(Error::AllocationFailure { .. })
        ));
    }

    #[test]
    fn it_should_map_at_least_the_requested_size_zeroed() {
        let mut buf = SharedBuffer::allocate(10_000).unwrap();
        assert!(buf.len() >= 10_000);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(buf.cells().len(), 2500);

        buf.cells_mut()[2499] = 0xAABB_CCDD;
        assert_eq!(buf.cells()[2499], 0xAABB_CCDD);
    }

    #[test]
    fn it_should_unlink_the_name_right_after_creation() {
        let mut ns = Recording {
            collisions_left: 3,
            ..Default::default()
        };
        let first = SharedBuffer::allocate_in(&mut ns, 4096).unwrap();
        let second = SharedBuffer::allocate_in(&mut ns, 4096).unwrap();

        assert_eq!(ns.created.len(), 2);
        assert_eq!(ns.created, ns.unlinked);
        for name in &ns.created {
            let reopened = mman::shm_open(name.as_str(), OFlag::O_RDWR, Mode::empty());
            assert_eq!(reopened.err(), Some(Errno::ENOENT), "{} still visible", name);
        }
        drop((first, second));
    }

    #[test]
    fn it_should_keep_the_mapping_after_closing_the_descriptor() {
        let mut buf = SharedBuffer::allocate(4096).unwrap();
        assert!(buf.fd().is_some());
        buf.close_fd();
        assert!(buf.fd().is_none());

        buf.as_bytes_mut()[4095] = 7;
        assert_eq!(buf.as_bytes()[4095], 7);
    }

    #[test]
    fn it_should_accept_a_namespace_returning_any_owned_fd() {
        struct DevNull;
        impl Namespace for DevNull {
            fn create_exclusive(&mut self, _name: &str) -> nix::Result<OwnedFd> {
                File::open("/dev/null")
                    .map(OwnedFd::from)
                    .map_err(|_| Errno::EIO)
            }
            fn unlink(&mut self, _name: &str) -> nix::Result<()> {
                Ok(())
            }
        }
        let fd = create_anonymous(&mut DevNull).unwrap();
        // ftruncate on a character device is rejected, and the failure maps
        // to an allocation error rather than a panic.
        assert!(matches!(
            truncate(&fd, 4096),
            Err(Error::AllocationFailure { .. })
        ));
    }
}
