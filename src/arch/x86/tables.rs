//! Static syscall tables for x86 (i686) Linux.
//!
//! The 32-bit call-number space does not coincide with x86_64's (e.g.
//! `read` is 3 here, not 0) — this is a distinct table, not a view over
//! the x86_64 one. Parameter prototypes are filled in for the syscalls a
//! 32-bit tracee commonly issues; everything else still resolves a name
//! via [`NAMES`] but falls back to the `("?", "?")` prototype sentinel,
//! which is within contract (see `prototype_of`).

pub(super) const NAMES: &[(u64, &str)] = &[
    (1, "exit"),
    (2, "fork"),
    (3, "read"),
    (4, "write"),
    (5, "open"),
    (6, "close"),
    (7, "waitpid"),
    (8, "creat"),
    (9, "link"),
    (10, "unlink"),
    (11, "execve"),
    (12, "chdir"),
    (13, "time"),
    (14, "mknod"),
    (15, "chmod"),
    (16, "lchown"),
    (19, "lseek"),
    (20, "getpid"),
    (21, "mount"),
    (22, "umount"),
    (23, "setuid"),
    (24, "getuid"),
    (26, "ptrace"),
    (27, "alarm"),
    (29, "pause"),
    (30, "utime"),
    (33, "access"),
    (34, "nice"),
    (36, "sync"),
    (37, "kill"),
    (38, "rename"),
    (39, "mkdir"),
    (40, "rmdir"),
    (41, "dup"),
    (42, "pipe"),
    (43, "times"),
    (45, "brk"),
    (46, "setgid"),
    (47, "getgid"),
    (49, "geteuid"),
    (50, "getegid"),
    (51, "acct"),
    (52, "umount2"),
    (54, "ioctl"),
    (57, "setpgid"),
    (60, "umask"),
    (61, "chroot"),
    (62, "ustat"),
    (63, "dup2"),
    (64, "getppid"),
    (65, "getpgrp"),
    (66, "setsid"),
    (67, "sigaction"),
    (70, "setreuid"),
    (71, "setregid"),
    (74, "sethostname"),
    (75, "setrlimit"),
    (76, "getrlimit"),
    (77, "getrusage"),
    (78, "gettimeofday"),
    (79, "settimeofday"),
    (80, "getgroups"),
    (81, "setgroups"),
    (82, "select"),
    (83, "symlink"),
    (85, "readlink"),
    (87, "swapon"),
    (88, "reboot"),
    (90, "mmap"),
    (91, "munmap"),
    (92, "truncate"),
    (93, "ftruncate"),
    (94, "fchmod"),
    (95, "fchown"),
    (96, "getpriority"),
    (97, "setpriority"),
    (99, "statfs"),
    (100, "fstatfs"),
    (102, "socketcall"),
    (103, "syslog"),
    (104, "setitimer"),
    (105, "getitimer"),
    (106, "stat"),
    (107, "lstat"),
    (108, "fstat"),
    (110, "iopl"),
    (111, "vhangup"),
    (114, "wait4"),
    (115, "swapoff"),
    (116, "sysinfo"),
    (118, "fsync"),
    (120, "clone"),
    (121, "setdomainname"),
    (122, "uname"),
    (124, "adjtimex"),
    (125, "mprotect"),
    (131, "quotactl"),
    (132, "getpgid"),
    (133, "fchdir"),
    (135, "sysfs"),
    (136, "personality"),
    (138, "setfsuid"),
    (139, "setfsgid"),
    (140, "_llseek"),
    (141, "getdents"),
    (142, "_newselect"),
    (143, "flock"),
    (144, "msync"),
    (145, "readv"),
    (146, "writev"),
    (147, "getsid"),
    (148, "fdatasync"),
    (150, "mlock"),
    (151, "munlock"),
    (152, "mlockall"),
    (153, "munlockall"),
    (158, "sched_yield"),
    (162, "nanosleep"),
    (163, "mremap"),
    (164, "setresuid"),
    (165, "getresuid"),
    (168, "poll"),
    (170, "setresgid"),
    (171, "getresgid"),
    (172, "prctl"),
    (173, "rt_sigreturn"),
    (174, "rt_sigaction"),
    (175, "rt_sigprocmask"),
    (180, "pread64"),
    (181, "pwrite64"),
    (182, "chown"),
    (183, "getcwd"),
    (186, "sigaltstack"),
    (187, "sendfile"),
    (190, "vfork"),
    (192, "mmap2"),
    (195, "stat64"),
    (196, "lstat64"),
    (197, "fstat64"),
    (199, "getuid32"),
    (200, "getgid32"),
    (201, "geteuid32"),
    (202, "getegid32"),
    (212, "chown32"),
    (213, "setuid32"),
    (214, "setgid32"),
    (219, "madvise"),
    (220, "getdents64"),
    (221, "fcntl64"),
    (224, "gettid"),
    (240, "futex"),
    (241, "sched_setaffinity"),
    (242, "sched_getaffinity"),
    (250, "fadvise64"),
    (252, "exit_group"),
    (254, "epoll_create"),
    (255, "epoll_ctl"),
    (256, "epoll_wait"),
    (258, "set_tid_address"),
    (264, "clock_settime"),
    (265, "clock_gettime"),
    (266, "clock_getres"),
    (270, "tgkill"),
    (295, "openat"),
    (296, "mkdirat"),
    (298, "fchownat"),
    (301, "unlinkat"),
    (302, "renameat"),
    (306, "fchmodat"),
    (307, "faccessat"),
    (311, "set_robust_list"),
    (320, "utimensat"),
    (323, "eventfd"),
    (324, "fallocate"),
    (328, "eventfd2"),
    (329, "epoll_create1"),
    (330, "dup3"),
    (331, "pipe2"),
    (340, "prlimit64"),
    (345, "sendmmsg"),
    (346, "setns"),
    (355, "getrandom"),
    (356, "memfd_create"),
    (358, "execveat"),
    (359, "socket"),
    (362, "connect"),
    (364, "bind"),
    (365, "listen"),
    (366, "accept4"),
];

type Proto = &'static [(&'static str, &'static str)];

/// Prototypes for the subset of syscalls a 32-bit tracee most commonly
/// issues. Anything missing here still resolves its name via [`NAMES`]
/// and falls back to the `("?", "?")` sentinel for its prototype.
pub(super) const PROTOTYPES: &[(&str, Proto)] = &[
    ("exit", &[("int", "error_code")]),
    ("fork", &[]),
    ("read", &[("unsigned int", "fd"), ("char*", "buf"), ("size_t", "count")]),
    ("write", &[("unsigned int", "fd"), ("const char*", "buf"), ("size_t", "count")]),
    ("open", &[("const char*", "filename"), ("int", "flags"), ("umode_t", "mode")]),
    ("close", &[("unsigned int", "fd")]),
    ("creat", &[("const char*", "pathname"), ("umode_t", "mode")]),
    ("link", &[("const char*", "oldname"), ("const char*", "newname")]),
    ("unlink", &[("const char*", "pathname")]),
    ("execve", &[("const char*", "filename"), ("const char*const*", "argv"), ("const char*const*", "envp")]),
    ("chdir", &[("const char*", "filename")]),
    ("chmod", &[("const char*", "filename"), ("umode_t", "mode")]),
    ("lchown", &[("const char*", "filename"), ("uid_t", "user"), ("gid_t", "group")]),
    ("lseek", &[("unsigned int", "fd"), ("off_t", "offset"), ("unsigned int", "whence")]),
    ("getpid", &[]),
    ("ptrace", &[("long", "request"), ("long", "pid"), ("unsigned long", "addr"), ("unsigned long", "data")]),
    ("access", &[("const char*", "filename"), ("int", "mode")]),
    ("kill", &[("pid_t", "pid"), ("int", "sig")]),
    ("rename", &[("const char*", "oldname"), ("const char*", "newname")]),
    ("mkdir", &[("const char*", "pathname"), ("umode_t", "mode")]),
    ("rmdir", &[("const char*", "pathname")]),
    ("dup", &[("unsigned int", "fildes")]),
    ("pipe", &[("int*", "fildes")]),
    ("brk", &[("unsigned long", "brk")]),
    ("ioctl", &[("unsigned int", "fd"), ("unsigned int", "cmd"), ("unsigned long", "arg")]),
    ("dup2", &[("unsigned int", "oldfd"), ("unsigned int", "newfd")]),
    ("getppid", &[]),
    ("mmap", &[("unsigned long", "addr"), ("unsigned long", "len"), ("unsigned long", "prot"), ("unsigned long", "flags"), ("unsigned long", "fd"), ("unsigned long", "off")]),
    ("munmap", &[("unsigned long", "addr"), ("size_t", "len")]),
    ("truncate", &[("const char*", "path"), ("long", "length")]),
    ("ftruncate", &[("unsigned int", "fd"), ("off_t", "length")]),
    ("fchmod", &[("unsigned int", "fd"), ("umode_t", "mode")]),
    ("fchown", &[("unsigned int", "fd"), ("uid_t", "user"), ("gid_t", "group")]),
    ("stat", &[("const char*", "filename"), ("struct stat*", "statbuf")]),
    ("lstat", &[("const char*", "filename"), ("struct stat*", "statbuf")]),
    ("fstat", &[("unsigned int", "fd"), ("struct stat*", "statbuf")]),
    ("wait4", &[("pid_t", "upid"), ("int*", "stat_addr"), ("int", "options"), ("struct rusage*", "ru")]),
    ("fsync", &[("unsigned int", "fd")]),
    ("clone", &[("unsigned long", "clone_flags"), ("unsigned long", "newsp"), ("int*", "parent_tidptr"), ("int*", "child_tidptr"), ("unsigned long", "tls")]),
    ("uname", &[("struct old_utsname*", "name")]),
    ("mprotect", &[("unsigned long", "start"), ("size_t", "len"), ("unsigned long", "prot")]),
    ("getcwd", &[("char*", "buf"), ("unsigned long", "size")]),
    ("pread64", &[("unsigned int", "fd"), ("char*", "buf"), ("size_t", "count"), ("loff_t", "pos")]),
    ("pwrite64", &[("unsigned int", "fd"), ("const char*", "buf"), ("size_t", "count"), ("loff_t", "pos")]),
    ("chown", &[("const char*", "filename"), ("uid_t", "user"), ("gid_t", "group")]),
    ("sendfile", &[("int", "out_fd"), ("int", "in_fd"), ("off_t*", "offset"), ("size_t", "count")]),
    ("vfork", &[]),
    ("mmap2", &[("unsigned long", "addr"), ("unsigned long", "len"), ("unsigned long", "prot"), ("unsigned long", "flags"), ("unsigned long", "fd"), ("unsigned long", "pgoff")]),
    ("stat64", &[("const char*", "filename"), ("struct stat64*", "statbuf")]),
    ("lstat64", &[("const char*", "filename"), ("struct stat64*", "statbuf")]),
    ("fstat64", &[("unsigned int", "fd"), ("struct stat64*", "statbuf")]),
    ("madvise", &[("unsigned long", "start"), ("size_t", "len_in"), ("int", "behavior")]),
    ("getdents64", &[("unsigned int", "fd"), ("struct linux_dirent64*", "dirent"), ("unsigned int", "count")]),
    ("gettid", &[]),
    ("futex", &[("u32*", "uaddr"), ("int", "op"), ("u32", "val"), ("const struct old_timespec32*", "utime"), ("u32*", "uaddr2"), ("u32", "val3")]),
    ("exit_group", &[("int", "error_code")]),
    ("set_tid_address", &[("int*", "tidptr")]),
    ("openat", &[("int", "dfd"), ("const char*", "filename"), ("int", "flags"), ("umode_t", "mode")]),
    ("mkdirat", &[("int", "dfd"), ("const char*", "pathname"), ("umode_t", "mode")]),
    ("fchownat", &[("int", "dfd"), ("const char*", "filename"), ("uid_t", "user"), ("gid_t", "group"), ("int", "flag")]),
    ("unlinkat", &[("int", "dfd"), ("const char*", "pathname"), ("int", "flag")]),
    ("renameat", &[("int", "olddfd"), ("const char*", "oldname"), ("int", "newdfd"), ("const char*", "newname")]),
    ("fchmodat", &[("int", "dfd"), ("const char*", "filename"), ("umode_t", "mode")]),
    ("faccessat", &[("int", "dfd"), ("const char*", "filename"), ("int", "mode")]),
    ("utimensat", &[("int", "dfd"), ("const char*", "filename"), ("struct old_timespec32*", "utimes"), ("int", "flags")]),
    ("getrandom", &[("char*", "buf"), ("size_t", "count"), ("unsigned int", "flags")]),
    ("memfd_create", &[("const char*", "uname"), ("unsigned int", "flags")]),
    ("execveat", &[("int", "dfd"), ("const char*", "filename"), ("const char*const*", "argv"), ("const char*const*", "envp"), ("int", "flags")]),
    ("socket", &[("int", "family"), ("int", "type"), ("int", "protocol")]),
    ("connect", &[("int", "fd"), ("struct sockaddr*", "uservaddr"), ("int", "addrlen")]),
    ("bind", &[("int", "fd"), ("struct sockaddr*", "umyaddr"), ("int", "addrlen")]),
    ("listen", &[("int", "fd"), ("int", "backlog")]),
];
